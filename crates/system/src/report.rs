//! Text rendering of a [`SystemSnapshot`]

use std::fmt;

use crate::info::SystemSnapshot;

/// Header line preceding the ranked process list
pub const TOP_PROCESSES_HEADER: &str = "Top 5 processes in terms of CPU:";

/// Number of lines emitted regardless of the process count
pub const FIXED_LINES: usize = 6;

/// Render the fixed-template report
///
/// Every line is newline-terminated; one line per ranked process follows the
/// header with no padding when fewer than five were sampled.
#[must_use]
pub fn render(snapshot: &SystemSnapshot) -> String {
    snapshot.to_string()
}

impl fmt::Display for SystemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer Name: {}", self.computer_name)?;
        writeln!(f, "Total Physical Memory: {:.2} Gb", self.total_physical_memory_gb)?;
        writeln!(f, "Total Number of Physical Processors: {}", self.physical_processors)?;
        writeln!(f, "Total Number of Cores: {}", self.logical_processors)?;
        writeln!(f, "Total Number of Hard Disks: {}", self.number_of_hard_disks)?;
        writeln!(f, "{TOP_PROCESSES_HEADER}")?;

        for (idx, process) in self.top_5_cpu_processes.iter().enumerate() {
            writeln!(f, "     {}. {} - {:.0}%", idx + 1, process.name, process.cpu_percent)?;
        }

        Ok(())
    }
}
