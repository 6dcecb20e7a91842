use serde::{Deserialize, Serialize};

use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// A coordinate rounding policy applied when geometries are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionModel {
    /// Coordinates are stored exactly as given.
    #[default]
    Floating,
    /// Coordinates are rounded onto a grid of `1 / scale`.
    ///
    /// A scale of `1.0` rounds to whole numbers; `1000.0` keeps three decimal places.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    pub fn fixed(scale: f64) -> Self {
        Self::Fixed { scale }
    }

    /// Round a single value according to this model.
    pub fn make_precise(&self, value: f64) -> f64 {
        match self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => {
                if !value.is_finite() {
                    return value;
                }
                (value * scale).round() / scale
            }
        }
    }

    pub fn make_precise_coord(&self, coord: Coord) -> Coord {
        match self {
            PrecisionModel::Floating => coord,
            _ => Coord::new(self.make_precise(coord.x), self.make_precise(coord.y)),
        }
    }
}

/// Builds geometries, applying a [`PrecisionModel`] to every coordinate.
///
/// This is the only way the WKB reader constructs geometries, so the reader itself stays
/// agnostic of any rounding policy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryFactory {
    precision_model: PrecisionModel,
}

impl GeometryFactory {
    pub fn new(precision_model: PrecisionModel) -> Self {
        Self { precision_model }
    }

    pub fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }

    pub fn create_point(&self, coord: Coord) -> Point {
        Point::new(self.precision_model.make_precise_coord(coord))
    }

    pub fn create_line_string(&self, coords: Vec<Coord>) -> LineString {
        LineString::new(self.make_precise_all(coords))
    }

    pub fn create_linear_ring(&self, coords: Vec<Coord>) -> LinearRing {
        self.create_line_string(coords)
    }

    /// The first ring, if any, is the shell.
    pub fn create_polygon(&self, rings: Vec<LinearRing>) -> Polygon {
        Polygon::from_rings(rings)
    }

    pub fn create_multi_point(&self, points: Vec<Point>) -> MultiPoint {
        MultiPoint::new(points)
    }

    pub fn create_multi_line_string(&self, lines: Vec<LineString>) -> MultiLineString {
        MultiLineString::new(lines)
    }

    pub fn create_multi_polygon(&self, polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon::new(polygons)
    }

    pub fn create_geometry_collection(&self, geometries: Vec<Geometry>) -> GeometryCollection {
        GeometryCollection::new(geometries)
    }

    fn make_precise_all(&self, mut coords: Vec<Coord>) -> Vec<Coord> {
        if self.precision_model != PrecisionModel::Floating {
            for coord in coords.iter_mut() {
                *coord = self.precision_model.make_precise_coord(*coord);
            }
        }
        coords
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn floating_is_identity() {
        let factory = GeometryFactory::default();
        let point = factory.create_point(Coord::new(0.1 + 0.2, -7.25));
        assert_eq!(point.x(), 0.1 + 0.2);
        assert_eq!(point.y(), -7.25);
    }

    #[test]
    fn fixed_rounds_to_grid() {
        let pm = PrecisionModel::fixed(1000.0);
        assert_relative_eq!(pm.make_precise(1.23456), 1.235);
        assert_relative_eq!(pm.make_precise(-1.23449), -1.234);

        let factory = GeometryFactory::new(PrecisionModel::fixed(1.0));
        let line = factory.create_line_string(vec![Coord::new(1.4, 2.6), Coord::new(10., 0.)]);
        assert_eq!(line.coords(), &[Coord::new(1., 3.), Coord::new(10., 0.)]);
    }

    #[test]
    fn fixed_keeps_non_finite() {
        let pm = PrecisionModel::fixed(10.0);
        assert!(pm.make_precise(f64::NAN).is_nan());
        assert_eq!(pm.make_precise(f64::INFINITY), f64::INFINITY);
    }
}
