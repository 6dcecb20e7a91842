//! Binary and text encodings of [`Geometry`](crate::geometry::Geometry), plus conversion to
//! and from the [`geo`] crate.

pub mod geo;
pub mod hex;
pub mod wkb;
