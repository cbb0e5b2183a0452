//! Log file location
//!
//! The report log lives next to the program, never at a configured path:
//!
//! 1. the directory of the running executable,
//! 2. the directory of the path the program was invoked as (`argv[0]`),
//! 3. the current working directory.

use std::path::{Path, PathBuf};

use crate::core::{LogError, LogResult};

/// Fixed name of the report log file
pub const LOG_FILE_NAME: &str = "hostprobe.log";

/// Candidate locations, in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationHints {
    /// Path of the running executable
    pub executable: Option<PathBuf>,
    /// Path the program was invoked as, made absolute
    pub invoked_path: Option<PathBuf>,
    /// Current working directory
    pub working_dir: Option<PathBuf>,
}

impl LocationHints {
    /// Gather hints from the running process
    #[must_use]
    pub fn from_process() -> Self {
        let working_dir = std::env::current_dir().ok();
        let invoked_path = std::env::args_os()
            .next()
            .map(PathBuf::from)
            .filter(|path| path.parent().is_some_and(|p| !p.as_os_str().is_empty()))
            .map(|path| match &working_dir {
                Some(cwd) if path.is_relative() => cwd.join(path),
                _ => path,
            });

        Self {
            executable: std::env::current_exe().ok(),
            invoked_path,
            working_dir,
        }
    }
}

/// Resolve the directory the log file belongs in
pub fn resolve_log_dir(hints: &LocationHints) -> LogResult<PathBuf> {
    hints
        .executable
        .as_deref()
        .and_then(parent_dir)
        .or_else(|| hints.invoked_path.as_deref().and_then(parent_dir))
        .or_else(|| hints.working_dir.clone())
        .ok_or(LogError::NoLogDirectory)
}

/// Resolve the full path of the log file
pub fn log_file_path(hints: &LocationHints) -> LogResult<PathBuf> {
    Ok(resolve_log_dir(hints)?.join(LOG_FILE_NAME))
}

fn parent_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
