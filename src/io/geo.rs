//! Conversion between this crate's geometries and [`geo`] geometries.

use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

impl From<Coord> for geo::Coord<f64> {
    fn from(value: Coord) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<geo::Coord<f64>> for Coord {
    fn from(value: geo::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<&Point> for geo::Point<f64> {
    fn from(value: &Point) -> Self {
        geo::Point(value.coord().into())
    }
}

impl From<&LineString> for geo::LineString<f64> {
    fn from(value: &LineString) -> Self {
        geo::LineString::new(value.coords().iter().map(|c| (*c).into()).collect())
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    /// An empty polygon becomes a [`geo::Polygon`] with an empty exterior.
    fn from(value: &Polygon) -> Self {
        let exterior = value
            .exterior()
            .map(geo::LineString::from)
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = value.interiors().iter().map(geo::LineString::from).collect();
        geo::Polygon::new(exterior, interiors)
    }
}

impl From<&MultiPoint> for geo::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        geo::MultiPoint::new(value.points().iter().map(geo::Point::from).collect())
    }
}

impl From<&MultiLineString> for geo::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo::MultiLineString::new(value.lines().iter().map(geo::LineString::from).collect())
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(value.polygons().iter().map(geo::Polygon::from).collect())
    }
}

impl From<&GeometryCollection> for geo::GeometryCollection<f64> {
    fn from(value: &GeometryCollection) -> Self {
        geo::GeometryCollection::new_from(
            value.geometries().iter().map(geo::Geometry::from).collect(),
        )
    }
}

impl From<&Geometry> for geo::Geometry<f64> {
    fn from(value: &Geometry) -> Self {
        match value {
            Geometry::Point(g) => geo::Geometry::Point(g.into()),
            Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
            Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
            Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.into()),
            Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
            Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => geo::Geometry::GeometryCollection(g.into()),
        }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(value: geo::Point<f64>) -> Self {
        Point::new(value.0.into())
    }
}

impl From<geo::LineString<f64>> for LineString {
    fn from(value: geo::LineString<f64>) -> Self {
        value.0.into_iter().map(Coord::from).collect()
    }
}

impl From<geo::Polygon<f64>> for Polygon {
    /// A [`geo::Polygon`] with an empty exterior and no interiors becomes an empty polygon.
    fn from(value: geo::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Polygon::empty();
        }
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

impl From<geo::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo::MultiPoint<f64>) -> Self {
        MultiPoint::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<geo::MultiLineString<f64>> for MultiLineString {
    fn from(value: geo::MultiLineString<f64>) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo::MultiPolygon<f64>) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}

impl From<geo::GeometryCollection<f64>> for GeometryCollection {
    fn from(value: geo::GeometryCollection<f64>) -> Self {
        GeometryCollection::new(value.0.into_iter().map(Geometry::from).collect())
    }
}

impl From<geo::Geometry<f64>> for Geometry {
    /// Lines become two-point line strings, rectangles and triangles become single-ring
    /// polygons.
    fn from(value: geo::Geometry<f64>) -> Self {
        match value {
            geo::Geometry::Point(g) => Geometry::Point(g.into()),
            geo::Geometry::Line(g) => {
                Geometry::LineString(LineString::new(vec![g.start.into(), g.end.into()]))
            }
            geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
            geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
            geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
            geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
            geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
            geo::Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.into()),
            geo::Geometry::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
            geo::Geometry::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::{gc0, gc1};

    #[test]
    fn round_trip_through_geo() {
        for gc in [gc0(), gc1()] {
            let geom = Geometry::GeometryCollection(gc);
            let geo_geom = geo::Geometry::from(&geom);
            assert_eq!(Geometry::from(geo_geom), geom);
        }
    }

    #[test]
    fn empty_polygon() {
        let geo_polygon = geo::Polygon::from(&Polygon::empty());
        assert!(geo_polygon.exterior().0.is_empty());
        assert_eq!(Polygon::from(geo_polygon), Polygon::empty());
    }

    #[test]
    fn line_and_rect() {
        let line = geo::Line::new(geo::coord! { x: 1., y: 2. }, geo::coord! { x: 3., y: 4. });
        assert_eq!(
            Geometry::from(geo::Geometry::Line(line)),
            Geometry::LineString(crate::test::linestring::ls0())
        );

        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let Geometry::Polygon(polygon) = Geometry::from(geo::Geometry::Rect(rect)) else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.num_rings(), 1);
        assert!(polygon.exterior().unwrap().is_closed());
    }
}
