//! Configuration types

mod presets;

use std::path::PathBuf;

pub use presets::{DEFAULT_DIAGNOSTICS_LEVEL, LEVEL_ENV_VARS};

/// Report log file configuration
///
/// Passed explicitly to [`FileSink`](crate::FileSink); nothing is stored in
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// File the report entries are appended to
    pub path: PathBuf,
    /// Label printed in the module column of the header.
    /// When `None`, the file stem of the emitting source file is used.
    pub module_label: Option<String>,
}

impl SinkConfig {
    /// Configuration for the given file with the default header
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            module_label: None,
        }
    }

    /// Override the module column of the header
    #[must_use]
    pub fn with_module_label(mut self, label: impl Into<String>) -> Self {
        self.module_label = Some(label.into());
        self
    }
}

/// Diagnostic (stderr) logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Filter directive (e.g., "warn", "hostprobe_system=debug")
    pub level: String,
    /// Use ANSI colors
    pub colors: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_DIAGNOSTICS_LEVEL.to_string(),
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}
