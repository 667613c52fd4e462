//! Error types for enumeration and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all enumeration operations
#[derive(Debug)]
pub enum EnumerationError {
    /// Target size is outside the supported range
    InvalidSize {
        /// Requested shape size
        size: usize,
        /// Largest supported size
        max: usize,
    },

    /// Attempted to build a shape with no cells
    ///
    /// Growth always extends a non-empty base shape, so reaching this from
    /// inside the engine indicates a defect rather than bad input.
    EmptyShape,

    /// Run stopped at a generation boundary by the cancellation flag
    Cancelled {
        /// Last size whose generation completed
        completed_size: usize,
    },

    /// Enumeration worker terminated abnormally
    Worker {
        /// Description of the failure
        reason: String,
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

    /// Failed to save the PNG contact sheet
    SheetExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "Invalid target size {size}: must be between 1 and {max}")
            }
            Self::EmptyShape => {
                write!(f, "A shape requires at least one cell")
            }
            Self::Cancelled { completed_size } => {
                write!(f, "Cancelled after completing size {completed_size}")
            }
            Self::Worker { reason } => {
                write!(f, "Enumeration worker failed: {reason}")
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
            Self::SheetExport { path, source } => {
                write!(f, "Failed to export sheet to '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EnumerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::SheetExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for enumeration results
pub type Result<T> = std::result::Result<T, EnumerationError>;

impl From<std::io::Error> for EnumerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
