//! A reader and writer for 2D OGC Well-Known Binary (WKB) geometries.
//!
//! ```
//! use geowkb::io::wkb::{from_wkb_hex, to_wkb_hex, Endianness};
//!
//! let geom = from_wkb_hex("000000000100000000000000000000000000000000").unwrap();
//! assert_eq!(
//!     to_wkb_hex(&geom, Endianness::LittleEndian).unwrap(),
//!     "010100000000000000000000000000000000000000"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;

pub use error::{WkbError, WkbResult};
pub use geometry::{Geometry, GeometryFactory, PrecisionModel};
pub use io::wkb::{WkbReader, WkbWriter};
