//! An owned, immutable two dimensional geometry model.
//!
//! [`Geometry`] is a closed enum over the seven geometry kinds that can be represented in WKB.
//! Values are built bottom-up, optionally through a [`GeometryFactory`] which applies a
//! [`PrecisionModel`] to every coordinate.

mod coord;
mod eq;
mod factory;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use coord::Coord;
pub use eq::{
    coord_eq, geometry_collection_eq, geometry_eq, line_string_eq, multi_line_string_eq,
    multi_point_eq, multi_polygon_eq, point_eq, polygon_eq,
};
pub use factory::{GeometryFactory, PrecisionModel};
pub use geometrycollection::GeometryCollection;
pub use linestring::{LineString, LinearRing};
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

/// The kind of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The WKT keyword for this kind of geometry.
    pub fn name(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "POINT",
            LineString => "LINESTRING",
            Polygon => "POLYGON",
            MultiPoint => "MULTIPOINT",
            MultiLineString => "MULTILINESTRING",
            MultiPolygon => "MULTIPOLYGON",
            GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A geometry of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Whether this geometry contains no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The total number of coordinates in this geometry and all of its children.
    pub fn num_coords(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(g) => g.num_coords(),
            Geometry::Polygon(g) => g.num_coords(),
            Geometry::MultiPoint(g) => g.num_points(),
            Geometry::MultiLineString(g) => g.num_coords(),
            Geometry::MultiPolygon(g) => g.num_coords(),
            Geometry::GeometryCollection(g) => g.num_coords(),
        }
    }

    /// Structural comparison: same variant, same ordering of children and coordinates, with each
    /// coordinate pair differing by no more than `tolerance` on either axis.
    ///
    /// A tolerance of `0.0` is an exact comparison.
    pub fn equals_exact(&self, other: &Geometry, tolerance: f64) -> bool {
        geometry_eq(self, other, tolerance)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
