//! Reading and writing 2D OGC Well-Known Binary.
//!
//! Every geometry is written as a byte order marker, a `u32` type code and a type specific
//! body. Nested geometries repeat the full header and may use a different byte order than
//! their parent. [`WkbReader`] decodes either byte order, [`WkbWriter`] always writes the one
//! it was configured with.

mod api;
pub mod common;
pub mod primitive;
pub mod reader;
pub mod writer;

pub use api::{from_wkb, from_wkb_hex, to_wkb, to_wkb_hex};
pub use common::{Endianness, WKBType};
pub use reader::{WkbReader, WkbReaderOptions};
pub use writer::{WkbWriter, WkbWriterOptions};
