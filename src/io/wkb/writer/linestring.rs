use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::{Coord, LineString};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::HEADER_BYTES;

/// The byte length of a point count followed by the coordinates.
pub(super) fn coords_wkb_size(num_coords: usize) -> usize {
    4 + num_coords * 16
}

/// Write a point count and the coordinates.
pub(super) fn write_coords<W: Write + ?Sized>(
    writer: &mut W,
    coords: &[Coord],
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_count(coords.len(), byte_order)?;
    for coord in coords {
        writer.write_coord(*coord, byte_order)?;
    }
    Ok(())
}

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + coords_wkb_size(geom.num_coords())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::LineString.into(), byte_order)?;
    write_coords(writer, geom.coords(), byte_order)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::hex::to_hex;
    use crate::test::linestring::{ls0, ls1};
    use crate::test::wkb::LINE_STRING;

    #[test]
    fn both_orders() {
        let mut buf = vec![];
        write_line_string_as_wkb(&mut buf, &ls0(), Endianness::LittleEndian).unwrap();
        assert_eq!(to_hex(&buf), LINE_STRING.ndr);

        let mut buf = vec![];
        write_line_string_as_wkb(&mut buf, &ls0(), Endianness::BigEndian).unwrap();
        assert_eq!(to_hex(&buf), LINE_STRING.xdr);
    }

    #[test]
    fn test_size() {
        for geom in [ls0(), ls1(), LineString::default()] {
            let mut buf = vec![];
            write_line_string_as_wkb(&mut buf, &geom, Endianness::BigEndian).unwrap();
            assert_eq!(line_string_wkb_size(&geom), buf.len());
        }
    }
}
