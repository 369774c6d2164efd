//! Error types for grid construction, parsing and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Point2;

/// Main error type for recoverable grid operations
///
/// Precondition violations (out-of-grid asserting access, wrapping on an
/// empty axis) panic instead; these variants cover input that a caller can
/// reasonably reject.
#[derive(Debug)]
pub enum GridError {
    /// A row's length differs from the first row's length
    RaggedRows {
        /// Zero-based index of the offending row
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Inner grids of a grid-of-grids do not share one shape
    MismatchedTiles {
        /// Outer position of the offending tile
        position: Point2,
        /// Shape of the first tile as (width, height)
        expected: (usize, usize),
        /// Shape of the offending tile as (width, height)
        found: (usize, usize),
    },

    /// Character does not name a direction in any supported notation
    UnknownDirection {
        /// The unrecognized character
        symbol: char,
    },

    /// Text input could not be parsed
    Parse {
        /// One-based line number of the failure
        line: usize,
        /// Description of what was wrong
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} elements but the grid is {expected} wide"
                )
            }
            Self::MismatchedTiles {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile at {position} is {}x{} but tiles are {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::UnknownDirection { symbol } => {
                write!(f, "Unknown direction symbol '{symbol}'")
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a parse error for a one-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> GridError {
    GridError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a path-level error for a rejected CLI target
pub fn io_error(msg: &str) -> GridError {
    GridError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
