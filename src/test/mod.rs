pub(crate) mod multilinestring;
pub(crate) mod point;
pub(crate) mod polygon;

use crate::geometry::{Coord, LineString};

pub(crate) fn line(coords: &[(f64, f64)]) -> LineString {
    coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}
