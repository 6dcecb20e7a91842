use crate::error::WkbResult;
use crate::geometry::{GeometryType, MultiPolygon};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::{Decoder, MIN_GEOMETRY_BYTES};

impl<'a> Decoder<'a> {
    /// MultiPolygon body: numPolygons, then each as a complete WKB Polygon
    pub(super) fn read_multi_polygon(
        &mut self,
        byte_order: Endianness,
        depth: usize,
    ) -> WkbResult<MultiPolygon> {
        let num_polygons = self.cursor.read_count(byte_order, MIN_GEOMETRY_BYTES)?;
        let mut polygons = Vec::with_capacity(num_polygons);
        for _ in 0..num_polygons {
            let header = self.read_child_header(GeometryType::Polygon, depth + 1)?;
            polygons.push(self.read_polygon(header.byte_order)?);
        }
        Ok(self.factory.create_multi_polygon(polygons))
    }
}
