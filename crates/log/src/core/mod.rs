//! Core components for the hostprobe logging layer.
//!
//! ### [`error`] - Error handling
//! Structured errors for log-file I/O, configuration and filter parsing.

pub mod error;

// Re-export core types
pub use error::{LogError, LogResult};
