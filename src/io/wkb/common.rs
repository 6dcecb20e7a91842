use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{WkbError, WkbResult};
use crate::geometry::GeometryType;
use crate::io::wkb::primitive::WkbCursor;

/// The WKB type codes supported by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// Read the type of the geometry encoded in `buf` without decoding the rest of it.
    pub fn from_buffer(buf: &[u8]) -> WkbResult<Self> {
        let mut cursor = WkbCursor::new(buf);
        let byte_order = Endianness::from_marker(cursor.read_u8()?, 0)?;
        let offset = cursor.position();
        let type_id = cursor.read_u32(byte_order)?;
        Self::from_type_id(type_id, offset)
    }

    pub(crate) fn from_type_id(type_id: u32, offset: usize) -> WkbResult<Self> {
        Self::try_from_primitive(type_id)
            .map_err(|_| WkbError::UnsupportedGeometryType { offset, type_id })
    }
}

impl From<WKBType> for GeometryType {
    fn from(value: WKBType) -> Self {
        match value {
            WKBType::Point => GeometryType::Point,
            WKBType::LineString => GeometryType::LineString,
            WKBType::Polygon => GeometryType::Polygon,
            WKBType::MultiPoint => GeometryType::MultiPoint,
            WKBType::MultiLineString => GeometryType::MultiLineString,
            WKBType::MultiPolygon => GeometryType::MultiPolygon,
            WKBType::GeometryCollection => GeometryType::GeometryCollection,
        }
    }
}

impl From<GeometryType> for WKBType {
    fn from(value: GeometryType) -> Self {
        match value {
            GeometryType::Point => WKBType::Point,
            GeometryType::LineString => WKBType::LineString,
            GeometryType::Polygon => WKBType::Polygon,
            GeometryType::MultiPoint => WKBType::MultiPoint,
            GeometryType::MultiLineString => WKBType::MultiLineString,
            GeometryType::MultiPolygon => WKBType::MultiPolygon,
            GeometryType::GeometryCollection => WKBType::GeometryCollection,
        }
    }
}

/// Byte order of the values following a WKB byte order marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    /// XDR, marker `0`
    BigEndian,
    /// NDR, marker `1`
    #[default]
    LittleEndian,
}

impl Endianness {
    /// Interpret a byte order marker found at `offset`.
    pub fn from_marker(marker: u8, offset: usize) -> WkbResult<Self> {
        match marker {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            _ => Err(WkbError::InvalidByteOrder { offset, marker }),
        }
    }
}

impl TryFrom<u8> for Endianness {
    type Error = WkbError;

    fn try_from(value: u8) -> WkbResult<Self> {
        Self::from_marker(value, 0)
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WkbErrorKind;
    use crate::io::hex::from_hex;
    use crate::test::wkb::{MULTI_POLYGON, POINT};

    #[test]
    fn peek_type() {
        let buf = from_hex(MULTI_POLYGON.xdr).unwrap();
        assert_eq!(WKBType::from_buffer(&buf).unwrap(), WKBType::MultiPolygon);

        let buf = from_hex(POINT.ndr).unwrap();
        assert_eq!(WKBType::from_buffer(&buf).unwrap(), WKBType::Point);
    }

    #[test]
    fn peek_type_errors() {
        assert_eq!(
            WKBType::from_buffer(&[]).unwrap_err().kind(),
            WkbErrorKind::UnexpectedEndOfInput
        );
        assert!(matches!(
            WKBType::from_buffer(&[1, 1, 0]).unwrap_err(),
            WkbError::UnexpectedEndOfInput {
                offset: 1,
                needed: 4
            }
        ));
        assert_eq!(
            WKBType::from_buffer(&[2, 1, 0, 0, 0]).unwrap_err().kind(),
            WkbErrorKind::InvalidByteOrder
        );
        let err = WKBType::from_buffer(&[1, 8, 0, 0, 0]).unwrap_err();
        assert!(matches!(
            err,
            WkbError::UnsupportedGeometryType {
                offset: 1,
                type_id: 8
            }
        ));
    }

    #[test]
    fn markers() {
        assert_eq!(u8::from(Endianness::BigEndian), 0);
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert!(Endianness::try_from(0xFF).is_err());
    }
}
