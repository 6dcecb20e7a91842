use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::Polygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::linestring::{coords_wkb_size, write_coords};
use crate::io::wkb::writer::HEADER_BYTES;

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let rings: usize = geom
        .rings()
        .iter()
        .map(|ring| coords_wkb_size(ring.num_coords()))
        .sum();
    HEADER_BYTES + 4 + rings
}

/// Write a Polygon geometry to a Writer encoded as WKB
///
/// Ring closure is not checked; rings are written exactly as stored.
pub fn write_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Polygon,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::Polygon.into(), byte_order)?;

    // numRings
    writer.write_count(geom.num_rings(), byte_order)?;

    for ring in geom.rings() {
        write_coords(writer, ring.coords(), byte_order)?;
    }

    Ok(())
}
