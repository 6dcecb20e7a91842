use serde::{Deserialize, Serialize};

use crate::geometry::LinearRing;

/// A polygon, stored as a shell followed by zero or more holes.
///
/// A polygon without any rings is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Create a polygon from its exterior ring and interior rings.
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(exterior);
        rings.extend(interiors);
        Self { rings }
    }

    /// Create a polygon from its rings, the first being the shell.
    pub fn from_rings(rings: Vec<LinearRing>) -> Self {
        Self { rings }
    }

    pub fn empty() -> Self {
        Self { rings: vec![] }
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// All rings, shell first.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn num_coords(&self) -> usize {
        self.rings.iter().map(|ring| ring.num_coords()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::p0;

    #[test]
    fn shell_and_holes() {
        let polygon = p0();
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
        assert_eq!(polygon.interiors()[0].num_coords(), 4);
        assert_eq!(polygon.num_coords(), 9);
    }

    #[test]
    fn empty() {
        let polygon = Polygon::empty();
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.num_interiors(), 0);
    }
}
