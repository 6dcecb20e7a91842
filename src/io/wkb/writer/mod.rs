//! Encoding [`Geometry`] values as WKB.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{WkbError, WkbResult};
use crate::geometry::Geometry;
use crate::io::hex::to_hex;
use crate::io::wkb::common::Endianness;

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{write_point_as_wkb, POINT_WKB_SIZE};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// The byte order marker plus the geometry type.
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// Configuration of a [`WkbWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbWriterOptions {
    /// Number of output dimensions. Only 2 is supported.
    pub dimension: usize,

    /// Byte order of every geometry written, including nested ones.
    pub byte_order: Endianness,
}

impl Default for WkbWriterOptions {
    fn default() -> Self {
        Self {
            dimension: 2,
            byte_order: Endianness::LittleEndian,
        }
    }
}

/// Writes geometries as 2D WKB in a fixed byte order.
///
/// Output depends only on the geometry and the writer's configuration, so the same input
/// always encodes to the same bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WkbWriter {
    options: WkbWriterOptions,
}

impl WkbWriter {
    /// Create a writer for the given output dimension and byte order.
    pub fn new(dimension: usize, byte_order: Endianness) -> WkbResult<Self> {
        Self::try_new(WkbWriterOptions {
            dimension,
            byte_order,
        })
    }

    pub fn try_new(options: WkbWriterOptions) -> WkbResult<Self> {
        if options.dimension != 2 {
            return Err(WkbError::UnsupportedDimension(options.dimension));
        }
        Ok(Self { options })
    }

    pub fn byte_order(&self) -> Endianness {
        self.options.byte_order
    }

    pub fn dimension(&self) -> usize {
        self.options.dimension
    }

    /// Encode a geometry into a new buffer.
    pub fn write(&self, geom: &Geometry) -> WkbResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(geometry_wkb_size(geom));
        self.write_to(&mut buf, geom)?;
        Ok(buf)
    }

    /// Encode a geometry as uppercase hex.
    pub fn write_hex(&self, geom: &Geometry) -> WkbResult<String> {
        Ok(to_hex(&self.write(geom)?))
    }

    /// Encode a geometry into `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W, geom: &Geometry) -> WkbResult<()> {
        debug!(
            "Writing {} as {:?} WKB",
            geom.geometry_type(),
            self.options.byte_order
        );
        write_geometry_as_wkb(&mut writer, geom, self.options.byte_order)
    }

    /// Encode a geometry as uppercase hex into `writer`.
    pub fn write_hex_to<W: Write>(&self, mut writer: W, geom: &Geometry) -> WkbResult<()> {
        writer.write_all(self.write_hex(geom)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WkbErrorKind;
    use crate::test::wkb::{LINE_STRING, POINT};
    use crate::test::{linestring, point};

    #[test]
    fn only_two_dimensions() {
        assert!(WkbWriter::new(2, Endianness::BigEndian).is_ok());
        for dimension in [0, 1, 3, 4] {
            let err = WkbWriter::new(dimension, Endianness::LittleEndian).unwrap_err();
            assert_eq!(err.kind(), WkbErrorKind::Unsupported);
        }
    }

    #[test]
    fn hex_output() {
        let geom = Geometry::Point(point::p0());
        let ndr = WkbWriter::new(2, Endianness::LittleEndian).unwrap();
        let xdr = WkbWriter::new(2, Endianness::BigEndian).unwrap();
        assert_eq!(ndr.write_hex(&geom).unwrap(), POINT.ndr);
        assert_eq!(xdr.write_hex(&geom).unwrap(), POINT.xdr);
    }

    #[test]
    fn write_to_sink() {
        let geom = Geometry::LineString(linestring::ls0());
        let writer = WkbWriter::new(2, Endianness::BigEndian).unwrap();

        let mut out = Vec::new();
        writer.write_hex_to(&mut out, &geom).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), LINE_STRING.xdr);
    }

    #[test]
    fn default_is_little_endian() {
        let writer = WkbWriter::default();
        assert_eq!(writer.byte_order(), Endianness::LittleEndian);
        assert_eq!(writer.dimension(), 2);
        let buf = writer.write(&Geometry::Point(point::p0())).unwrap();
        assert_eq!(buf[0], 1);
    }
}
