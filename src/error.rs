//! Error types for game setup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a game from starting.
///
/// These are fatal: they surface before any game operation is reachable and are not retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// No usable secret words after filtering the answer list.
    #[error("answer list contains no valid 5-letter words")]
    EmptyAnswers,

    /// The board must have at least one row.
    #[error("invalid number of rows: {rows} (must be at least 1)")]
    InvalidRows {
        /// Requested row count.
        rows: usize,
    },

    /// A word list file could not be read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
