#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
//! # Hostprobe System
//!
//! One-shot snapshot of host identity and resource metrics.
//!
//! This crate provides:
//! - Host identity, memory and CPU topology queries
//! - Fixed-disk classification of mounted volumes
//! - Two-phase process CPU sampling with top-N ranking
//! - The fixed-template text report
//!
//! ## Features
//!
//! - `sysinfo` (default): OS-backed [`SysinfoHost`] and
//!   [`process::SysinfoProcesses`] sources
//!
//! ## Example
//!
//! ```no_run
//! use hostprobe_system::Collector;
//!
//! fn main() -> hostprobe_system::SystemResult<()> {
//!     let snapshot = Collector::system().collect()?;
//!     print!("{snapshot}");
//!     Ok(())
//! }
//! ```
pub mod core;
pub mod cpu;
pub mod disk;
pub mod info;
pub mod memory;
pub mod prelude;
pub mod process;
pub mod report;

// Re-exports
pub use crate::core::{SystemError, SystemResult};
pub use info::{Collector, CollectorConfig, HostSource, SystemSnapshot};
pub use process::{ProcessSource, ProcessUsage};
pub use report::render;

#[cfg(feature = "sysinfo")]
#[cfg_attr(docsrs, doc(cfg(feature = "sysinfo")))]
pub use info::SysinfoHost;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
