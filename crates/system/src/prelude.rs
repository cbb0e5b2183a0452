//! Prelude module for convenient imports
//!
//! ```rust
//! use hostprobe_system::prelude::*;
//!
//! let topology = CpuTopology::reconcile(None, Some(8));
//! assert_eq!(topology.physical, 8);
//! ```

// Core types
pub use crate::core::{SystemError, SystemOptionExt, SystemResult, SystemResultExt};
pub use crate::cpu::CpuTopology;
pub use crate::disk::Volume;
pub use crate::info::{Collector, CollectorConfig, HostSource, SystemSnapshot};
pub use crate::process::{ProcessSampler, ProcessSource, ProcessUsage};
pub use crate::report::render;

#[cfg(feature = "sysinfo")]
pub use crate::{info::SysinfoHost, process::SysinfoProcesses};
