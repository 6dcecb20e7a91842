use serde::{Deserialize, Serialize};

use crate::geometry::LineString;

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_lines(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn num_coords(&self) -> usize {
        self.0.iter().map(|line| line.num_coords()).sum()
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}
