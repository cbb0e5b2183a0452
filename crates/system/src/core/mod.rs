//! Core components shared by every collector module.
//!
//! ### [`error`] - Error handling
//! Structured error type for platform, I/O and collection failures.
//!
//! ### [`result`] - Result helpers
//! Extension traits for turning platform answers into [`SystemResult`].

pub mod error;
pub mod result;

// Re-export core types
pub use error::{SystemError, SystemResult};
pub use result::{SystemOptionExt, SystemResultExt};
