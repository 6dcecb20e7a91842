use crate::error::WkbResult;
use crate::geometry::{GeometryType, MultiPoint};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::Decoder;

/// A child point is a full geometry: header plus x, y.
const POINT_BYTES: usize = 1 + 4 + 16;

impl<'a> Decoder<'a> {
    /// MultiPoint body: numPoints, then each point as a complete WKB Point
    pub(super) fn read_multi_point(
        &mut self,
        byte_order: Endianness,
        depth: usize,
    ) -> WkbResult<MultiPoint> {
        let num_points = self.cursor.read_count(byte_order, POINT_BYTES)?;
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            let header = self.read_child_header(GeometryType::Point, depth + 1)?;
            points.push(self.read_point(header.byte_order)?);
        }
        Ok(self.factory.create_multi_point(points))
    }
}
