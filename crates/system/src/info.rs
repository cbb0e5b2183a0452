//! Host snapshot collection

use std::time::Duration;

use tracing::debug;

use crate::core::{SystemError, SystemResult, SystemResultExt};
use crate::cpu::CpuTopology;
use crate::disk::{self, Volume};
use crate::memory;
use crate::process::{
    DEFAULT_SAMPLE_INTERVAL, DEFAULT_TOP_N, ProcessSampler, ProcessSource, ProcessUsage,
};

/// Host name substituted when the OS does not report one
pub const UNKNOWN_HOST: &str = "Unknown";

/// Snapshot of host identity and resource metrics for one run
///
/// Built once by [`Collector::collect`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// OS-reported host name
    pub computer_name: String,
    /// Total RAM in binary gigabytes, rounded to 2 decimals
    pub total_physical_memory_gb: f64,
    /// Number of physical cores
    pub physical_processors: usize,
    /// Number of logical processors (`>= physical_processors`)
    pub logical_processors: usize,
    /// Number of fixed, non-removable volumes
    pub number_of_hard_disks: usize,
    /// At most five processes, descending by normalized CPU usage
    pub top_5_cpu_processes: Vec<ProcessUsage>,
}

/// Source of host-level metrics
///
/// Every query is independent so a failing one only degrades its own field.
pub trait HostSource {
    /// OS-reported host name
    fn host_name(&self) -> SystemResult<String>;

    /// Total installed physical memory in bytes
    fn total_memory_bytes(&self) -> SystemResult<u64>;

    /// Number of physical cores
    fn physical_cores(&self) -> SystemResult<usize>;

    /// Number of logical processors
    fn logical_cores(&self) -> SystemResult<usize>;

    /// Mounted storage volumes
    fn volumes(&self) -> SystemResult<Vec<Volume>>;
}

/// Collector tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Delay between the baseline and the measured CPU read
    pub sample_interval: Duration,
    /// Number of processes kept in the ranking
    pub top_n: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Builds a [`SystemSnapshot`] from a host source and a process source
#[derive(Debug)]
pub struct Collector<H, P> {
    host: H,
    processes: P,
    config: CollectorConfig,
}

impl<H: HostSource, P: ProcessSource> Collector<H, P> {
    /// Create a collector over explicit sources
    pub fn new(host: H, processes: P, config: CollectorConfig) -> Self {
        Self {
            host,
            processes,
            config,
        }
    }

    /// Gather one snapshot
    ///
    /// Unavailable host metrics are degraded (unknown name, zero memory,
    /// zero disks, physical equal to logical). Collection fails only when no
    /// host metric is readable at all or the process table cannot be
    /// enumerated.
    pub fn collect(&mut self) -> SystemResult<SystemSnapshot> {
        let mut readable = 0usize;

        let computer_name = degrade("computer_name", self.host.host_name(), &mut readable)
            .unwrap_or_else(|| UNKNOWN_HOST.to_string());
        let memory_bytes = degrade(
            "total_physical_memory",
            self.host.total_memory_bytes(),
            &mut readable,
        );
        let physical = degrade("physical_processors", self.host.physical_cores(), &mut readable);
        let logical = degrade("logical_processors", self.host.logical_cores(), &mut readable);
        let volumes = degrade("number_of_hard_disks", self.host.volumes(), &mut readable);

        if readable == 0 {
            return Err(SystemError::CollectionFailed(
                "no host metric could be read".to_string(),
            ))
            .with_component("host");
        }

        let topology = CpuTopology::reconcile(physical, logical);

        let sampler = ProcessSampler::new(self.config.sample_interval, self.config.top_n);
        let top_5_cpu_processes = sampler
            .sample(&mut self.processes, topology.logical)
            .map_err(|e| SystemError::CollectionFailed(e.to_string()))
            .with_component("process")?;

        Ok(SystemSnapshot {
            computer_name,
            total_physical_memory_gb: memory_bytes.map_or(0.0, memory::bytes_to_gib),
            physical_processors: topology.physical,
            logical_processors: topology.logical,
            number_of_hard_disks: volumes.as_deref().map_or(0, disk::count_fixed),
            top_5_cpu_processes,
        })
    }
}

/// Keep a metric value or log why its field is degraded
fn degrade<T>(field: &'static str, result: SystemResult<T>, readable: &mut usize) -> Option<T> {
    match result {
        Ok(value) => {
            *readable += 1;
            Some(value)
        }
        Err(e) => {
            debug!(field, error = %e, "metric unavailable, degrading");
            None
        }
    }
}

#[cfg(feature = "sysinfo")]
pub use os::SysinfoHost;

#[cfg(feature = "sysinfo")]
impl Collector<SysinfoHost, crate::process::SysinfoProcesses> {
    /// Collector over the running host with default settings
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            SysinfoHost::new(),
            crate::process::SysinfoProcesses::new(),
            CollectorConfig::default(),
        )
    }
}

#[cfg(feature = "sysinfo")]
mod os {
    use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

    use super::HostSource;
    use crate::core::{SystemError, SystemOptionExt, SystemResult};
    use crate::disk::{self, Volume};

    /// [`HostSource`] backed by `sysinfo`
    pub struct SysinfoHost {
        system: System,
    }

    impl SysinfoHost {
        /// Read memory and CPU tables of the running host
        #[must_use]
        pub fn new() -> Self {
            let refresh = RefreshKind::nothing()
                .with_memory(MemoryRefreshKind::nothing().with_ram())
                .with_cpu(CpuRefreshKind::nothing());
            Self {
                system: System::new_with_specifics(refresh),
            }
        }
    }

    impl Default for SysinfoHost {
        fn default() -> Self {
            Self::new()
        }
    }

    impl std::fmt::Debug for SysinfoHost {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SysinfoHost")
                .field("cpus", &self.system.cpus().len())
                .finish_non_exhaustive()
        }
    }

    impl HostSource for SysinfoHost {
        fn host_name(&self) -> SystemResult<String> {
            System::host_name()
                .filter(|name| !name.is_empty())
                .or_not_found("host name")
        }

        fn total_memory_bytes(&self) -> SystemResult<u64> {
            Some(self.system.total_memory())
                .filter(|bytes| *bytes > 0)
                .or_not_found("total physical memory")
        }

        fn physical_cores(&self) -> SystemResult<usize> {
            System::physical_core_count()
                .filter(|n| *n > 0)
                .or_not_supported("physical core count")
        }

        fn logical_cores(&self) -> SystemResult<usize> {
            Some(self.system.cpus().len())
                .filter(|n| *n > 0)
                .or_not_found("logical processor count")
        }

        fn volumes(&self) -> SystemResult<Vec<Volume>> {
            if !sysinfo::IS_SUPPORTED_SYSTEM {
                return Err(SystemError::feature_not_supported("disk enumeration"));
            }
            Ok(disk::list())
        }
    }
}
