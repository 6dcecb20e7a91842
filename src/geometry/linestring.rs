use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// An ordered sequence of coordinates.
///
/// Empty and single-coordinate line strings are representable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineString(Vec<Coord>);

/// A ring of a [`Polygon`][crate::geometry::Polygon].
///
/// Rings are expected to be closed (first coordinate equal to the last), but this is not
/// enforced.
pub type LinearRing = LineString;

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinates are identical.
    ///
    /// Empty line strings are considered closed.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl<C: Into<Coord>> FromIterator<C> for LineString {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
