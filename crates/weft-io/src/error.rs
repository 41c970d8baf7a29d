//! Error types for board file I/O.

use std::error::Error;
use std::fmt;
use std::io;

use weft_core::GeometryError;

/// Errors from reading or writing a board file.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the `P1` header line.
    InvalidHeader {
        /// The line found instead.
        found: String,
    },
    /// The dimension line is not two positive integers.
    InvalidDimensions {
        /// The offending line.
        line: String,
    },
    /// The dimensions do not satisfy the board's power-of-two constraints.
    Geometry(GeometryError),
    /// A cell line holds something other than `0` or `1`.
    InvalidCell {
        /// 1-based line number in the file.
        line: usize,
        /// The offending content.
        found: String,
    },
    /// The file ended before all cells were read.
    UnexpectedEof {
        /// Cells expected in total.
        expected: usize,
        /// Cells actually read.
        read: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidHeader { found } => {
                write!(f, "expected 'P1' header, found {found:?}")
            }
            Self::InvalidDimensions { line } => {
                write!(f, "expected '<rows> <cols>' dimension line, found {line:?}")
            }
            Self::Geometry(e) => write!(f, "unsupported board dimensions: {e}"),
            Self::InvalidCell { line, found } => {
                write!(f, "line {line}: expected '0' or '1', found {found:?}")
            }
            Self::UnexpectedEof { expected, read } => {
                write!(f, "ran out of input after {read} of {expected} cells")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GeometryError> for CodecError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
