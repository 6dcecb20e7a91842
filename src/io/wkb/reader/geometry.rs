use log::trace;

use crate::error::{WkbError, WkbResult};
use crate::geometry::{Geometry, GeometryFactory, GeometryType};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::primitive::WkbCursor;
use crate::io::wkb::reader::WkbReaderOptions;

/// The smallest possible encoding of a geometry: header plus an empty count.
pub(super) const MIN_GEOMETRY_BYTES: usize = 1 + 4 + 4;

/// The byte order marker and type code that start every geometry.
#[derive(Debug, Clone, Copy)]
pub(super) struct Header {
    /// Offset of the byte order marker
    pub offset: usize,
    pub byte_order: Endianness,
    pub wkb_type: WKBType,
}

/// Recursive-descent decoder over a single buffer.
///
/// Every geometry, nested or not, starts with its own header, so the byte order is passed
/// explicitly to each body reader rather than stored here.
pub(super) struct Decoder<'a> {
    pub(super) cursor: WkbCursor<'a>,
    pub(super) factory: &'a GeometryFactory,
    options: &'a WkbReaderOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(
        cursor: WkbCursor<'a>,
        factory: &'a GeometryFactory,
        options: &'a WkbReaderOptions,
    ) -> Self {
        Self {
            cursor,
            factory,
            options,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    fn read_header(&mut self) -> WkbResult<Header> {
        let offset = self.cursor.position();
        let byte_order = Endianness::from_marker(self.cursor.read_u8()?, offset)?;
        let type_id = self.cursor.read_u32(byte_order)?;
        let wkb_type = WKBType::from_type_id(type_id, offset + 1)?;
        trace!("WKB {wkb_type:?} ({byte_order:?}) at byte {offset}");
        Ok(Header {
            offset,
            byte_order,
            wkb_type,
        })
    }

    /// Decode a complete geometry of any type at the given nesting depth.
    pub fn read_geometry(&mut self, depth: usize) -> WkbResult<Geometry> {
        let header = self.read_header()?;
        self.read_body(header, depth)
    }

    /// Read the header of a child geometry which must be of type `expected`.
    pub fn read_child_header(
        &mut self,
        expected: GeometryType,
        depth: usize,
    ) -> WkbResult<Header> {
        let header = self.read_header()?;
        let found = GeometryType::from(header.wkb_type);
        if found != expected {
            return Err(WkbError::UnexpectedGeometryType {
                offset: header.offset,
                expected,
                found,
            });
        }
        self.check_depth(&header, depth)?;
        Ok(header)
    }

    fn check_depth(&self, header: &Header, depth: usize) -> WkbResult<()> {
        if depth > self.options.max_depth {
            return Err(WkbError::malformed(
                header.offset,
                format!(
                    "geometry nesting exceeds the maximum depth of {}",
                    self.options.max_depth
                ),
            ));
        }
        Ok(())
    }

    fn read_body(&mut self, header: Header, depth: usize) -> WkbResult<Geometry> {
        self.check_depth(&header, depth)?;

        let byte_order = header.byte_order;
        let geometry = match header.wkb_type {
            WKBType::Point => Geometry::Point(self.read_point(byte_order)?),
            WKBType::LineString => Geometry::LineString(self.read_line_string(byte_order)?),
            WKBType::Polygon => Geometry::Polygon(self.read_polygon(byte_order)?),
            WKBType::MultiPoint => {
                Geometry::MultiPoint(self.read_multi_point(byte_order, depth)?)
            }
            WKBType::MultiLineString => {
                Geometry::MultiLineString(self.read_multi_line_string(byte_order, depth)?)
            }
            WKBType::MultiPolygon => {
                Geometry::MultiPolygon(self.read_multi_polygon(byte_order, depth)?)
            }
            WKBType::GeometryCollection => {
                Geometry::GeometryCollection(self.read_geometry_collection(byte_order, depth)?)
            }
        };
        Ok(geometry)
    }
}
