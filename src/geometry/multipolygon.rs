use serde::{Deserialize, Serialize};

use crate::geometry::Polygon;

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn num_coords(&self) -> usize {
        self.0.iter().map(|polygon| polygon.num_coords()).sum()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}
