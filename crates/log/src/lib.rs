//! # hostprobe-log
//!
//! Logging for the hostprobe probe. Two independent concerns live here:
//!
//! - **Report log file**: [`FileSink`] appends each report to `hostprobe.log`
//!   next to the running program, under a fixed-width header line:
//!
//!   ```text
//!   [2024-05-01 09:30:12] [sink         : 88 ] [INFO    ] [4242]
//!   Computer Name: probe-01
//!   ...
//!   ```
//!
//! - **Diagnostics**: [`init`] installs a stderr subscriber filtered by
//!   `HOSTPROBE_LOG` (or `RUST_LOG`), so stdout carries nothing but the report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hostprobe_log::FileSink;
//!
//! fn main() -> hostprobe_log::LogResult<()> {
//!     hostprobe_log::init()?;
//!
//!     let sink = FileSink::next_to_executable()?;
//!     sink.append("Computer Name: probe-01\n")?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
pub mod format;
pub mod location;
mod sink;
mod writer;

// Public API
pub use crate::core::{LogError, LogResult};
pub use builder::DiagnosticsBuilder;
pub use config::{DEFAULT_DIAGNOSTICS_LEVEL, DiagnosticsConfig, LEVEL_ENV_VARS, SinkConfig};
pub use format::{HeaderFormat, LocalTimestamp};
pub use location::{LOG_FILE_NAME, LocationHints, log_file_path, resolve_log_dir};
pub use sink::FileSink;
pub use writer::AppendWriter;

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Initialize diagnostics from the environment
pub fn init() -> LogResult<()> {
    init_with(DiagnosticsConfig::from_env())
}

/// Initialize diagnostics with custom configuration
pub fn init_with(config: DiagnosticsConfig) -> LogResult<()> {
    DiagnosticsBuilder::from_config(config).build()
}
