use crate::geometry::{Coord, Point};

pub(crate) fn p0() -> Point {
    Point::new(Coord::new(0., 0.))
}

pub(crate) fn p1() -> Point {
    Point::new(Coord::new(-122.4194, 37.7749))
}

pub(crate) fn p2() -> Point {
    Point::new(Coord::new(1e-300, -f64::MAX))
}
