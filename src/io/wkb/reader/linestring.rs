use crate::error::WkbResult;
use crate::geometry::{Coord, LineString};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::Decoder;

const COORD_BYTES: usize = 2 * 8;

impl<'a> Decoder<'a> {
    /// A point count followed by that many x, y pairs.
    pub(super) fn read_coords(&mut self, byte_order: Endianness) -> WkbResult<Vec<Coord>> {
        let num_points = self.cursor.read_count(byte_order, COORD_BYTES)?;
        let mut coords = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            coords.push(self.cursor.read_coord(byte_order)?);
        }
        Ok(coords)
    }

    /// LineString body: numPoints, then the points
    pub(super) fn read_line_string(&mut self, byte_order: Endianness) -> WkbResult<LineString> {
        let coords = self.read_coords(byte_order)?;
        Ok(self.factory.create_line_string(coords))
    }
}

#[cfg(test)]
mod test {
    use crate::error::WkbErrorKind;
    use crate::geometry::{Geometry, LineString};
    use crate::io::hex::from_hex;
    use crate::io::wkb::reader::WkbReader;
    use crate::test::linestring::ls0;
    use crate::test::wkb::LINE_STRING;

    #[test]
    fn both_orders() {
        let reader = WkbReader::default();
        let ndr = reader.read_hex(LINE_STRING.ndr).unwrap();
        let xdr = reader.read_hex(LINE_STRING.xdr).unwrap();
        assert_eq!(ndr, Geometry::LineString(ls0()));
        assert_eq!(ndr, xdr);
    }

    #[test]
    fn empty_line_string() {
        let geom = WkbReader::default()
            .read(&[1, 2, 0, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert_eq!(geom, Geometry::LineString(LineString::default()));
    }

    #[test]
    fn count_too_large() {
        let mut buf = from_hex(LINE_STRING.ndr).unwrap();
        buf[5] = 3;
        let err = WkbReader::default().read(&buf).unwrap_err();
        assert_eq!(err.kind(), WkbErrorKind::MalformedInput);
        assert_eq!(err.offset(), Some(5));
    }

    #[test]
    fn count_too_small() {
        let mut buf = from_hex(LINE_STRING.xdr).unwrap();
        buf[8] = 1;
        let err = WkbReader::default().read(&buf).unwrap_err();
        assert_eq!(err.kind(), WkbErrorKind::MalformedInput);
    }
}
