//! Decoding WKB into [`Geometry`] values.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{WkbError, WkbResult};
use crate::geometry::{Geometry, GeometryFactory};
use crate::io::hex::from_hex;
use crate::io::wkb::primitive::WkbCursor;
use geometry::Decoder;

/// Options controlling how strictly a [`WkbReader`] treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbReaderOptions {
    /// The deepest nesting of Multi* and GeometryCollection geometries accepted.
    ///
    /// A top-level geometry is at depth 0 and each child is one deeper than its parent.
    pub max_depth: usize,

    /// Accept input that continues past the end of the top-level geometry.
    pub allow_trailing_bytes: bool,
}

impl Default for WkbReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            allow_trailing_bytes: false,
        }
    }
}

/// Reads 2D WKB, building geometries through a [`GeometryFactory`].
///
/// A reader only holds configuration, so it can be reused for any number of inputs and shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct WkbReader {
    factory: GeometryFactory,
    options: WkbReaderOptions,
}

impl WkbReader {
    pub fn new(factory: GeometryFactory) -> Self {
        Self::with_options(factory, WkbReaderOptions::default())
    }

    pub fn with_options(factory: GeometryFactory, options: WkbReaderOptions) -> Self {
        Self { factory, options }
    }

    pub fn factory(&self) -> &GeometryFactory {
        &self.factory
    }

    pub fn options(&self) -> &WkbReaderOptions {
        &self.options
    }

    /// Decode one geometry from a WKB buffer.
    pub fn read(&self, buf: &[u8]) -> WkbResult<Geometry> {
        let mut decoder = Decoder::new(WkbCursor::new(buf), &self.factory, &self.options);
        let geometry = decoder.read_geometry(0)?;

        let remaining = decoder.remaining();
        if remaining > 0 {
            if !self.options.allow_trailing_bytes {
                return Err(WkbError::malformed(
                    decoder.position(),
                    format!("{remaining} unexpected byte(s) after the end of the geometry"),
                ));
            }
            debug!("Ignoring {remaining} trailing byte(s) after WKB geometry");
        }

        Ok(geometry)
    }

    /// Decode one geometry from hex-encoded WKB.
    pub fn read_hex(&self, text: &str) -> WkbResult<Geometry> {
        self.read(&from_hex(text)?)
    }

    /// Read all of `reader` into memory, then decode it as WKB.
    pub fn read_from<R: Read>(&self, mut reader: R) -> WkbResult<Geometry> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.read(&buf)
    }

    /// Read all of `reader` into memory, then decode it as hex-encoded WKB.
    pub fn read_hex_from<R: Read>(&self, mut reader: R) -> WkbResult<Geometry> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read_hex(&text)
    }
}
