//! Defines [`WkbError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::geometry::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkbError {
    /// Input that is not valid hex, or WKB whose counts are inconsistent with its content.
    #[error("Malformed input{}: {message}", fmt_offset(.offset))]
    MalformedInput {
        /// Byte offset of the offending field, when known
        offset: Option<usize>,
        /// Description of what was wrong
        message: String,
    },

    /// The buffer ended in the middle of a field.
    #[error("Unexpected end of input at byte {offset}: {needed} more byte(s) required")]
    UnexpectedEndOfInput {
        /// Byte offset where the truncated field starts
        offset: usize,
        /// Number of bytes the field needed
        needed: usize,
    },

    /// A byte order marker other than 0 (XDR) or 1 (NDR).
    #[error("Invalid byte order marker {marker} at byte {offset}")]
    InvalidByteOrder {
        /// Byte offset of the marker
        offset: usize,
        /// The marker value found
        marker: u8,
    },

    /// A geometry type code outside of 1..=7.
    #[error("Unsupported WKB geometry type {type_id} at byte {offset}")]
    UnsupportedGeometryType {
        /// Byte offset of the type code
        offset: usize,
        /// The type code found
        type_id: u32,
    },

    /// A child of a Multi* geometry whose type does not match its parent.
    #[error("Expected {expected} at byte {offset}, found {found}")]
    UnexpectedGeometryType {
        /// Byte offset of the child's header
        offset: usize,
        /// The variant required by the parent
        expected: GeometryType,
        /// The variant present in the input
        found: GeometryType,
    },

    /// Writers only support two dimensional output.
    #[error("Unsupported output dimension: {0}")]
    UnsupportedDimension(usize),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

fn fmt_offset(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => format!(" at byte {offset}"),
        None => String::new(),
    }
}

/// The broad category of a [`WkbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WkbErrorKind {
    MalformedInput,
    UnexpectedEndOfInput,
    InvalidByteOrder,
    UnsupportedGeometryType,
    Unsupported,
    Io,
}

impl WkbError {
    pub(crate) fn malformed(offset: impl Into<Option<usize>>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            offset: offset.into(),
            message: message.into(),
        }
    }

    /// The category of this error.
    ///
    /// A child of the wrong type inside a Multi* geometry counts as an unsupported geometry type.
    pub fn kind(&self) -> WkbErrorKind {
        use WkbError::*;
        match self {
            MalformedInput { .. } => WkbErrorKind::MalformedInput,
            UnexpectedEndOfInput { .. } => WkbErrorKind::UnexpectedEndOfInput,
            InvalidByteOrder { .. } => WkbErrorKind::InvalidByteOrder,
            UnsupportedGeometryType { .. } | UnexpectedGeometryType { .. } => {
                WkbErrorKind::UnsupportedGeometryType
            }
            UnsupportedDimension(_) => WkbErrorKind::Unsupported,
            IOError(_) => WkbErrorKind::Io,
        }
    }

    /// The byte offset into the input at which this error was detected, if any.
    pub fn offset(&self) -> Option<usize> {
        use WkbError::*;
        match self {
            MalformedInput { offset, .. } => *offset,
            UnexpectedEndOfInput { offset, .. }
            | InvalidByteOrder { offset, .. }
            | UnsupportedGeometryType { offset, .. }
            | UnexpectedGeometryType { offset, .. } => Some(*offset),
            UnsupportedDimension(_) | IOError(_) => None,
        }
    }
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_offset() {
        let err = WkbError::malformed(9, "ring count 3 exceeds remaining input");
        assert_eq!(
            err.to_string(),
            "Malformed input at byte 9: ring count 3 exceeds remaining input"
        );

        let err = WkbError::malformed(None, "odd number of hex digits");
        assert_eq!(err.to_string(), "Malformed input: odd number of hex digits");
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn kinds() {
        let err = WkbError::UnexpectedGeometryType {
            offset: 9,
            expected: GeometryType::Point,
            found: GeometryType::Polygon,
        };
        assert_eq!(err.kind(), WkbErrorKind::UnsupportedGeometryType);
        assert_eq!(err.to_string(), "Expected POINT at byte 9, found POLYGON");

        let err = WkbError::InvalidByteOrder {
            offset: 0,
            marker: 2,
        };
        assert_eq!(err.kind(), WkbErrorKind::InvalidByteOrder);
        assert_eq!(err.offset(), Some(0));
    }
}
