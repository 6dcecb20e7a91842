use crate::error::WkbResult;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::{Decoder, MIN_GEOMETRY_BYTES};

impl<'a> Decoder<'a> {
    /// GeometryCollection body: numGeometries, then each as a complete WKB geometry of any type
    pub(super) fn read_geometry_collection(
        &mut self,
        byte_order: Endianness,
        depth: usize,
    ) -> WkbResult<GeometryCollection> {
        let num_geometries = self.cursor.read_count(byte_order, MIN_GEOMETRY_BYTES)?;
        let mut geometries = Vec::with_capacity(num_geometries);
        for _ in 0..num_geometries {
            geometries.push(self.read_geometry(depth + 1)?);
        }
        Ok(self.factory.create_geometry_collection(geometries))
    }
}
