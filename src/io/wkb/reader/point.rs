use crate::error::WkbResult;
use crate::geometry::Point;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::Decoder;

impl<'a> Decoder<'a> {
    /// Point body: x, y
    pub(super) fn read_point(&mut self, byte_order: Endianness) -> WkbResult<Point> {
        let coord = self.cursor.read_coord(byte_order)?;
        Ok(self.factory.create_point(coord))
    }
}
