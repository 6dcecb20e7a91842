use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb, HEADER_BYTES};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let geometries: usize = geom.geometries().iter().map(geometry_wkb_size).sum();
    HEADER_BYTES + 4 + geometries
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &GeometryCollection,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::GeometryCollection.into(), byte_order)?;

    // numGeometries
    writer.write_count(geom.num_geometries(), byte_order)?;

    for inner_geom in geom.geometries() {
        write_geometry_as_wkb(writer, inner_geom, byte_order)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::hex::to_hex;
    use crate::test::geometrycollection::{gc0, gc1};
    use crate::test::wkb::GEOMETRY_COLLECTION;

    #[test]
    fn both_orders() {
        let mut buf = vec![];
        write_geometry_collection_as_wkb(&mut buf, &gc0(), Endianness::LittleEndian).unwrap();
        assert_eq!(to_hex(&buf), GEOMETRY_COLLECTION.ndr);

        let mut buf = vec![];
        write_geometry_collection_as_wkb(&mut buf, &gc0(), Endianness::BigEndian).unwrap();
        assert_eq!(to_hex(&buf), GEOMETRY_COLLECTION.xdr);
    }

    #[test]
    fn test_size() {
        for geom in [gc0(), gc1(), GeometryCollection::default()] {
            let mut buf = vec![];
            write_geometry_collection_as_wkb(&mut buf, &geom, Endianness::LittleEndian).unwrap();
            assert_eq!(geometry_collection_wkb_size(&geom), buf.len());
        }
    }
}
