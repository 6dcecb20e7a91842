use crate::error::WkbResult;
use crate::geometry::{GeometryType, MultiLineString};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::{Decoder, MIN_GEOMETRY_BYTES};

impl<'a> Decoder<'a> {
    /// MultiLineString body: numLineStrings, then each as a complete WKB LineString
    pub(super) fn read_multi_line_string(
        &mut self,
        byte_order: Endianness,
        depth: usize,
    ) -> WkbResult<MultiLineString> {
        let num_lines = self.cursor.read_count(byte_order, MIN_GEOMETRY_BYTES)?;
        let mut lines = Vec::with_capacity(num_lines);
        for _ in 0..num_lines {
            let header = self.read_child_header(GeometryType::LineString, depth + 1)?;
            lines.push(self.read_line_string(header.byte_order)?);
        }
        Ok(self.factory.create_multi_line_string(lines))
    }
}
