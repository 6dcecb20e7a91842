use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::{polygon_wkb_size, write_polygon_as_wkb, HEADER_BYTES};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let polygons: usize = geom.polygons().iter().map(polygon_wkb_size).sum();
    HEADER_BYTES + 4 + polygons
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPolygon,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::MultiPolygon.into(), byte_order)?;

    // numPolygons
    writer.write_count(geom.num_polygons(), byte_order)?;

    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon, byte_order)?;
    }

    Ok(())
}
