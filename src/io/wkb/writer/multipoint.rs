use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::{write_point_as_wkb, HEADER_BYTES, POINT_WKB_SIZE};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + 4 + geom.num_points() * POINT_WKB_SIZE
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPoint,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::MultiPoint.into(), byte_order)?;

    // numPoints
    writer.write_count(geom.num_points(), byte_order)?;

    for point in geom.points() {
        write_point_as_wkb(writer, point, byte_order)?;
    }

    Ok(())
}
