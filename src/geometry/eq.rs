use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

pub fn coord_eq(left: &Coord, right: &Coord, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return left == right;
    }
    (left.x - right.x).abs() <= tolerance && (left.y - right.y).abs() <= tolerance
}

pub fn point_eq(left: &Point, right: &Point, tolerance: f64) -> bool {
    coord_eq(&left.coord(), &right.coord(), tolerance)
}

pub fn line_string_eq(left: &LineString, right: &LineString, tolerance: f64) -> bool {
    if left.num_coords() != right.num_coords() {
        return false;
    }

    left.coords()
        .iter()
        .zip(right.coords())
        .all(|(l, r)| coord_eq(l, r, tolerance))
}

pub fn polygon_eq(left: &Polygon, right: &Polygon, tolerance: f64) -> bool {
    if left.num_rings() != right.num_rings() {
        return false;
    }

    left.rings()
        .iter()
        .zip(right.rings())
        .all(|(l, r)| line_string_eq(l, r, tolerance))
}

pub fn multi_point_eq(left: &MultiPoint, right: &MultiPoint, tolerance: f64) -> bool {
    if left.num_points() != right.num_points() {
        return false;
    }

    left.points()
        .iter()
        .zip(right.points())
        .all(|(l, r)| point_eq(l, r, tolerance))
}

pub fn multi_line_string_eq(
    left: &MultiLineString,
    right: &MultiLineString,
    tolerance: f64,
) -> bool {
    if left.num_lines() != right.num_lines() {
        return false;
    }

    left.lines()
        .iter()
        .zip(right.lines())
        .all(|(l, r)| line_string_eq(l, r, tolerance))
}

pub fn multi_polygon_eq(left: &MultiPolygon, right: &MultiPolygon, tolerance: f64) -> bool {
    if left.num_polygons() != right.num_polygons() {
        return false;
    }

    left.polygons()
        .iter()
        .zip(right.polygons())
        .all(|(l, r)| polygon_eq(l, r, tolerance))
}

pub fn geometry_collection_eq(
    left: &GeometryCollection,
    right: &GeometryCollection,
    tolerance: f64,
) -> bool {
    if left.num_geometries() != right.num_geometries() {
        return false;
    }

    left.geometries()
        .iter()
        .zip(right.geometries())
        .all(|(l, r)| geometry_eq(l, r, tolerance))
}

pub fn geometry_eq(left: &Geometry, right: &Geometry, tolerance: f64) -> bool {
    use Geometry::*;
    match (left, right) {
        (Point(l), Point(r)) => point_eq(l, r, tolerance),
        (LineString(l), LineString(r)) => line_string_eq(l, r, tolerance),
        (Polygon(l), Polygon(r)) => polygon_eq(l, r, tolerance),
        (MultiPoint(l), MultiPoint(r)) => multi_point_eq(l, r, tolerance),
        (MultiLineString(l), MultiLineString(r)) => multi_line_string_eq(l, r, tolerance),
        (MultiPolygon(l), MultiPolygon(r)) => multi_polygon_eq(l, r, tolerance),
        (GeometryCollection(l), GeometryCollection(r)) => {
            geometry_collection_eq(l, r, tolerance)
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multipoint, polygon};

    #[test]
    fn exact() {
        let ls = Geometry::LineString(linestring::ls0());
        assert!(ls.equals_exact(&ls.clone(), 0.0));

        let mp = Geometry::MultiPoint(multipoint::mp0());
        assert!(!ls.equals_exact(&mp, 0.0));
    }

    #[test]
    fn ring_ordering_matters() {
        let p0 = polygon::p0();
        let mut rings = p0.rings().to_vec();
        rings.reverse();
        let swapped = Polygon::from_rings(rings);
        assert!(!polygon_eq(&p0, &swapped, 0.0));
    }

    #[test]
    fn with_tolerance() {
        let left = LineString::new(vec![Coord::new(1., 2.), Coord::new(3., 4.)]);
        let right = LineString::new(vec![Coord::new(1.05, 2.), Coord::new(3., 3.95)]);
        assert!(!line_string_eq(&left, &right, 0.0));
        assert!(line_string_eq(&left, &right, 0.1));
        assert!(!line_string_eq(&left, &right, 0.01));
    }
}
