//! Error types for screensaver-core.

use std::path::{Path, PathBuf};

/// Result type alias for screensaver-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing screensaver content.
///
/// None of these are fatal to the process: content preparation turns them
/// into placeholder frame text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file or directory operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input (including decode errors from gzip streams).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Parquet error during file reading.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Arrow error while decoding record batches.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// File name does not map to a supported format.
    #[error("Unsupported format: {name}")]
    UnsupportedFormat {
        /// The file name that was rejected.
        name: String,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened at.
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
