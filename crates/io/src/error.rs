//! Error types for pluvio-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the pluvio-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a field cannot be parsed as the expected type.
    #[error("invalid value '{value}' at {}:{line}", path.display())]
    ParseValue {
        /// Path to the file being read.
        path: PathBuf,
        /// One-based line number of the bad record.
        line: usize,
        /// The offending field text.
        value: String,
    },

    /// Returned when a reference curve file is structurally unusable.
    #[error("invalid reference curve in {}: {reason}", path.display())]
    InvalidReference {
        /// Path to the file being read.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
