use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(Coord);

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self(coord)
    }

    pub fn coord(&self) -> Coord {
        self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(value)
    }
}
