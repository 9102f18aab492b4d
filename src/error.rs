//! Error types for the splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A referenced input path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Employees file does not match the expected shape.
    #[error("invalid employees file {}: expected {{\"employees\": [\"name\", ...]}} ({reason})", .path.display())]
    Format { path: PathBuf, reason: String },

    /// Input PDF is missing, unreadable, or not parseable.
    #[error("failed to read source PDF {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Page count and employee count disagree.
    #[error("page count mismatch: {pages} pages vs {names} employees")]
    CardinalityMismatch { pages: usize, names: usize },

    /// A single-page output could not be written. Outputs written before
    /// the failure are left on disk.
    #[error("failed to write {} (page index {index}): {source}", .path.display())]
    Write {
        path: PathBuf,
        index: usize,
        #[source]
        source: lopdf::Error,
    },

    /// IO error (directory creation, file reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
