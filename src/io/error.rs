//! Error types for planning, generation and export operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Cell;

/// Main error type for all crate operations
///
/// An unreachable destination is not an error; it is reported as an empty path.
#[derive(Debug)]
pub enum PathfindingError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell argument lies outside the grid it is used with
    CellOutOfBounds {
        /// What the cell was used as (start, destination, obstacle, ...)
        role: &'static str,
        /// The offending cell
        cell: Cell,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Two grid-bound values disagree about the grid dimensions
    ShapeMismatch {
        /// Dimensions that were expected (rows, cols)
        expected: (usize, usize),
        /// Dimensions that were supplied (rows, cols)
        actual: (usize, usize),
    },

    /// Input ended before a valid answer was given at the prompt
    PromptClosed {
        /// Prompt that was waiting for input
        prompt: &'static str,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or terminal I/O failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PathfindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOutOfBounds {
                role,
                cell,
                dimensions,
            } => {
                write!(
                    f,
                    "{role} cell {cell} is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Grid shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::PromptClosed { prompt } => {
                write!(f, "Input closed while waiting for {prompt}")
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

impl std::error::Error for PathfindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PathfindingError>;

impl From<std::io::Error> for PathfindingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PathfindingError {
    PathfindingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a terminal I/O error for the standard streams
pub fn terminal_error(operation: &'static str, source: std::io::Error) -> PathfindingError {
    PathfindingError::FileSystem {
        path: PathBuf::from("<terminal>"),
        operation,
        source,
    }
}
