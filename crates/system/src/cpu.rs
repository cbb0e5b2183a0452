//! CPU topology and usage normalization

/// Processor counts reported in a snapshot
///
/// Always satisfies `logical >= physical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTopology {
    /// Number of physical cores (hyperthreads excluded)
    pub physical: usize,
    /// Number of schedulable logical processors
    pub logical: usize,
}

impl CpuTopology {
    /// Build a topology from possibly missing platform answers
    ///
    /// - physical unknown: physical equals logical (platform cannot tell them apart)
    /// - logical unknown: logical equals physical
    /// - physical greater than logical: physical is clamped to logical
    #[must_use]
    pub fn reconcile(physical: Option<usize>, logical: Option<usize>) -> Self {
        match (physical, logical) {
            (Some(physical), Some(logical)) => Self {
                physical: physical.min(logical),
                logical,
            },
            (None, Some(logical)) => Self {
                physical: logical,
                logical,
            },
            (Some(physical), None) => Self {
                physical,
                logical: physical,
            },
            (None, None) => Self {
                physical: 0,
                logical: 0,
            },
        }
    }
}

/// Scale a platform CPU reading so 100% means one saturated logical CPU
///
/// Platforms report per-process usage summed over every core (up to
/// `100 * logical`); the reading is divided by the logical processor count.
/// A count of zero is treated as one.
///
/// # Examples
///
/// ```
/// use hostprobe_system::cpu::normalize_percent;
///
/// assert_eq!(normalize_percent(200.0, 4), 50.0);
/// ```
#[must_use]
pub fn normalize_percent(raw: f64, logical: usize) -> f64 {
    raw / logical.max(1) as f64
}
