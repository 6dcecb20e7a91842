use crate::error::WkbResult;
use crate::geometry::Geometry;
use crate::io::hex::{from_hex, to_hex};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WkbReader;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb};

/// Parse a WKB buffer with the default reader configuration.
pub fn from_wkb(buf: &[u8]) -> WkbResult<Geometry> {
    WkbReader::default().read(buf)
}

/// Parse hex-encoded WKB with the default reader configuration.
pub fn from_wkb_hex(text: &str) -> WkbResult<Geometry> {
    from_wkb(&from_hex(text)?)
}

/// Encode a geometry as 2D WKB in the given byte order.
pub fn to_wkb(geom: &Geometry, byte_order: Endianness) -> WkbResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom));
    write_geometry_as_wkb(&mut buf, geom, byte_order)?;
    Ok(buf)
}

/// Encode a geometry as uppercase hex 2D WKB in the given byte order.
pub fn to_wkb_hex(geom: &Geometry, byte_order: Endianness) -> WkbResult<String> {
    Ok(to_hex(&to_wkb(geom, byte_order)?))
}
