use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A collection of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}
