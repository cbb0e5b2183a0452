//! Error handling for hostprobe-log

use std::path::PathBuf;

use thiserror::Error;

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logging operations
#[derive(Debug, Error)]
pub enum LogError {
    /// Opening or writing the log file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File the operation was targeting
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter parsing error
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// Neither the executable, the invoked path nor the working directory is known
    #[error("No directory available for the log file")]
    NoLogDirectory,
}

impl LogError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
