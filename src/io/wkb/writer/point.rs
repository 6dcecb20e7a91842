use std::io::Write;

use crate::error::WkbResult;
use crate::geometry::Point;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WriteWkbExt;
use crate::io::wkb::writer::HEADER_BYTES;

/// The byte length of a WKBPoint
pub const POINT_WKB_SIZE: usize = HEADER_BYTES + 2 * 8;

/// Write a Point geometry to a Writer encoded as WKB
pub fn write_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Point,
    byte_order: Endianness,
) -> WkbResult<()> {
    writer.write_byte_order(byte_order)?;
    writer.write_u32_with(WKBType::Point.into(), byte_order)?;
    writer.write_coord(geom.coord(), byte_order)
}
