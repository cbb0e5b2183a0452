//! Error types for metric collection

use thiserror::Error;

/// Main error type for system operations
#[derive(Error, Debug)]
pub enum SystemError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Platform-specific error
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// Feature not supported on this platform
    #[error("Not supported on this platform: {0}")]
    NotSupported(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// No usable metric could be gathered at all
    #[error("Metric collection failed: {0}")]
    CollectionFailed(String),
}

/// Result type for system operations
pub type SystemResult<T> = Result<T, SystemError>;

impl SystemError {
    /// Create a platform error
    pub fn platform_error(message: impl Into<String>) -> Self {
        Self::PlatformError(message.into())
    }

    /// Create a not-supported error
    pub fn feature_not_supported(feature: impl Into<String>) -> Self {
        Self::NotSupported(feature.into())
    }

    /// Check if the error only degrades a single field of a snapshot
    ///
    /// [`SystemError::CollectionFailed`] is the only fatal kind.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CollectionFailed(_))
    }
}
