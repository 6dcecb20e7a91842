use crate::error::WkbResult;
use crate::geometry::Polygon;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::Decoder;

/// An empty ring is just its point count.
const MIN_RING_BYTES: usize = 4;

impl<'a> Decoder<'a> {
    /// Polygon body: numRings, then for each ring numPoints and the points
    pub(super) fn read_polygon(&mut self, byte_order: Endianness) -> WkbResult<Polygon> {
        let num_rings = self.cursor.read_count(byte_order, MIN_RING_BYTES)?;
        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            let coords = self.read_coords(byte_order)?;
            rings.push(self.factory.create_linear_ring(coords));
        }
        Ok(self.factory.create_polygon(rings))
    }
}
