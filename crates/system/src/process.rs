//! Process CPU sampling
//!
//! Most platforms report a process's CPU usage as "percent since the previous
//! query", so a single read is meaningless. [`ProcessSampler`] runs the
//! two-phase protocol:
//!
//! 1. enumerate every visible process and read its CPU counter (baseline),
//! 2. block for a fixed interval,
//! 3. enumerate again and read each counter, normalized by the logical CPU count,
//! 4. silently skip processes that vanished or cannot be read,
//! 5. rank descending and keep the top N.

use std::time::Duration;

use tracing::{debug, trace};

use crate::core::SystemResult;
use crate::cpu::normalize_percent;

/// Default delay between the baseline read and the measurement
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Default number of ranked processes kept in a snapshot
pub const DEFAULT_TOP_N: usize = 5;

/// A ranked process entry
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessUsage {
    /// Process name
    pub name: String,
    /// CPU usage where 100% is one saturated logical CPU
    pub cpu_percent: f64,
}

impl ProcessUsage {
    /// Create a new entry
    pub fn new(name: impl Into<String>, cpu_percent: f64) -> Self {
        Self {
            name: name.into(),
            cpu_percent,
        }
    }
}

/// Source of process CPU metrics
///
/// `list` refreshes the process table and the CPU accumulators of every
/// process; `cpu_percent` reads the value accumulated since the previous
/// refresh, summed over all cores (platform style, up to `100 * logical`).
pub trait ProcessSource {
    /// Enumerate visible processes as `(pid, name)` in a stable order
    ///
    /// An error here means the process table is not readable at all.
    fn list(&mut self) -> SystemResult<Vec<(u32, String)>>;

    /// CPU usage of a process since the previous `list`
    ///
    /// `None` when the process is gone or access is denied.
    fn cpu_percent(&self, pid: u32) -> Option<f64>;
}

/// Two-phase CPU sampler over a [`ProcessSource`]
#[derive(Debug, Clone, Copy)]
pub struct ProcessSampler {
    interval: Duration,
    top_n: usize,
}

impl Default for ProcessSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL, DEFAULT_TOP_N)
    }
}

impl ProcessSampler {
    /// Create a sampler with the given interval and ranking length
    #[must_use]
    pub fn new(interval: Duration, top_n: usize) -> Self {
        Self { interval, top_n }
    }

    /// Sample every process and return the top N by normalized CPU usage
    ///
    /// Blocks the calling thread for the sampling interval. There is no
    /// cancellation hook.
    pub fn sample<S: ProcessSource>(
        &self,
        source: &mut S,
        logical_processors: usize,
    ) -> SystemResult<Vec<ProcessUsage>> {
        let baseline = source.list()?;
        for (pid, _) in &baseline {
            // the first read only establishes the accumulator
            let _ = source.cpu_percent(*pid);
        }

        std::thread::sleep(self.interval);

        let current = source.list()?;
        let mut samples = Vec::with_capacity(current.len());
        let mut skipped = 0usize;

        for (pid, name) in current {
            match source.cpu_percent(pid) {
                Some(raw) if raw.is_finite() => {
                    let cpu_percent = normalize_percent(raw.max(0.0), logical_processors);
                    samples.push(ProcessUsage { name, cpu_percent });
                }
                _ => {
                    trace!(pid, name = %name, "process skipped during sampling");
                    skipped += 1;
                }
            }
        }

        debug!(
            primed = baseline.len(),
            sampled = samples.len(),
            skipped,
            interval_ms = self.interval.as_millis() as u64,
            "process sampling finished"
        );

        Ok(rank_processes(samples, self.top_n))
    }
}

/// Sort descending by CPU usage and keep the first `top_n`
///
/// The sort is stable: ties keep enumeration order.
#[must_use]
pub fn rank_processes(mut samples: Vec<ProcessUsage>, top_n: usize) -> Vec<ProcessUsage> {
    samples.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
    samples.truncate(top_n);
    samples
}

#[cfg(feature = "sysinfo")]
pub use os::SysinfoProcesses;

#[cfg(feature = "sysinfo")]
mod os {
    use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

    use super::ProcessSource;
    use crate::core::{SystemError, SystemResult};

    /// [`ProcessSource`] backed by the `sysinfo` process table
    pub struct SysinfoProcesses {
        system: System,
    }

    impl SysinfoProcesses {
        /// Create an empty process table; the first `list` fills it
        #[must_use]
        pub fn new() -> Self {
            Self {
                system: System::new(),
            }
        }
    }

    impl Default for SysinfoProcesses {
        fn default() -> Self {
            Self::new()
        }
    }

    impl std::fmt::Debug for SysinfoProcesses {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SysinfoProcesses")
                .field("processes", &self.system.processes().len())
                .finish()
        }
    }

    impl ProcessSource for SysinfoProcesses {
        fn list(&mut self) -> SystemResult<Vec<(u32, String)>> {
            if !sysinfo::IS_SUPPORTED_SYSTEM {
                return Err(SystemError::feature_not_supported("process table"));
            }

            self.system.refresh_processes_specifics(
                ProcessesToUpdate::All,
                true,
                ProcessRefreshKind::nothing().with_cpu().without_tasks(),
            );

            // Linux threads share the table with processes; their time is
            // already part of the owning process
            let mut entries: Vec<(u32, String)> = self
                .system
                .processes()
                .iter()
                .filter(|(_, process)| process.thread_kind().is_none())
                .map(|(pid, process)| (pid.as_u32(), process.name().to_string_lossy().into_owned()))
                .collect();
            entries.sort_unstable_by_key(|(pid, _)| *pid);

            Ok(entries)
        }

        fn cpu_percent(&self, pid: u32) -> Option<f64> {
            self.system
                .process(Pid::from_u32(pid))
                .map(|process| f64::from(process.cpu_usage()))
        }
    }
}
