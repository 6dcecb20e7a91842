use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// A heterogeneous collection of geometries, possibly including other collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|geom| geom.is_empty())
    }

    pub fn num_coords(&self) -> usize {
        self.0.iter().map(|geom| geom.num_coords()).sum()
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}
