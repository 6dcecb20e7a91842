use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::{line_string_wkb_size, write_line_string_as_wkb, HEADER_BYTES};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let lines: usize = geom.lines().iter().map(line_string_wkb_size).sum();
    HEADER_BYTES + 4 + lines
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiLineString,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::MultiLineString.into(), byte_order)?;

    // numLineStrings
    writer.write_count(geom.num_lines(), byte_order)?;

    for line in geom.lines() {
        write_line_string_as_wkb(writer, line, byte_order)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::hex::to_hex;
    use crate::test::multilinestring::{ml0, ml1};
    use crate::test::wkb::MULTI_LINE_STRING;

    #[test]
    fn both_orders() {
        let mut buf = vec![];
        write_multi_line_string_as_wkb(&mut buf, &ml0(), Endianness::LittleEndian).unwrap();
        assert_eq!(to_hex(&buf), MULTI_LINE_STRING.ndr);

        let mut buf = vec![];
        write_multi_line_string_as_wkb(&mut buf, &ml0(), Endianness::BigEndian).unwrap();
        assert_eq!(to_hex(&buf), MULTI_LINE_STRING.xdr);
    }

    #[test]
    fn test_size() {
        for geom in [ml0(), ml1()] {
            let mut buf = vec![];
            write_multi_line_string_as_wkb(&mut buf, &geom, Endianness::LittleEndian).unwrap();
            assert_eq!(multi_line_string_wkb_size(&geom), buf.len());
        }
    }
}
