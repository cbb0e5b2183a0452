//! Report log file sink

use std::path::Path;

use tracing::Level;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::SinkConfig;
use crate::core::LogResult;
use crate::format::HeaderFormat;
use crate::location::{LocationHints, log_file_path};
use crate::writer::AppendWriter;

/// Appends report entries to the log file
///
/// The file is opened for each entry and closed before [`FileSink::append`]
/// returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct FileSink {
    config: SinkConfig,
}

impl FileSink {
    /// Sink for an explicit configuration
    #[must_use]
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }

    /// Sink writing `hostprobe.log` next to the running program
    pub fn next_to_executable() -> LogResult<Self> {
        Self::from_hints(&LocationHints::from_process())
    }

    /// Sink for the log file resolved from `hints`
    pub fn from_hints(hints: &LocationHints) -> LogResult<Self> {
        Ok(Self::new(SinkConfig::new(log_file_path(hints)?)))
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Append one entry: the header line followed by `report`
    pub fn append(&self, report: &str) -> LogResult<()> {
        let format = HeaderFormat::new().with_module_label(self.config.module_label.clone());
        self.append_with(format, report)
    }

    fn append_with<T>(&self, format: HeaderFormat<T>, report: &str) -> LogResult<()>
    where
        T: FormatTime + Send + Sync + 'static,
    {
        let writer = AppendWriter::open(&self.config.path)?;

        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .log_internal_errors(false)
            .event_format(format)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("\n{report}");
        });

        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogError;
    use crate::location::LOG_FILE_NAME;
    use pretty_assertions::assert_eq;
    use std::fmt;
    use std::path::PathBuf;
    use tracing_subscriber::fmt::format::Writer;

    const REPORT: &str = "Computer Name: probe-01\nTotal Physical Memory: 15.93 Gb\n";

    struct FixedTime;

    impl FormatTime for FixedTime {
        fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
            w.write_str("2024-05-01 09:30:12")
        }
    }

    fn fixed_header() -> HeaderFormat<FixedTime> {
        HeaderFormat::new()
            .with_timer(FixedTime)
            .with_pid(4242)
            .with_module_label(Some("hostprobe".into()))
    }

    fn header_prefix() -> &'static str {
        "[2024-05-01 09:30:12] [hostprobe    : "
    }

    #[test]
    fn test_append_creates_file_with_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(SinkConfig::new(dir.path().join(LOG_FILE_NAME)));

        sink.append_with(fixed_header(), REPORT).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let (header, body) = content.split_once('\n').unwrap();
        assert!(header.starts_with(header_prefix()));
        assert!(header.ends_with("] [INFO    ] [4242] "));
        assert_eq!(body, REPORT);
    }

    #[test]
    fn test_append_preserves_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        std::fs::write(&path, "previous run\n").unwrap();
        let sink = FileSink::new(SinkConfig::new(&path));

        sink.append_with(fixed_header(), REPORT).unwrap();
        sink.append_with(fixed_header(), REPORT).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous run\n"));
        assert_eq!(content.matches(header_prefix()).count(), 2);
        assert!(!content.contains("\n\n"));
        assert!(content.ends_with(REPORT));
    }

    #[test]
    fn test_append_with_local_time_header() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(SinkConfig::new(dir.path().join(LOG_FILE_NAME)));

        sink.append(REPORT).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let header = content.lines().next().unwrap();
        let timestamp = &header[1..20];
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
        assert!(header.contains("[sink         : "));
        assert!(header.contains(&format!("[{}]", std::process::id())));
    }

    #[test]
    fn test_append_to_unwritable_location_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(LOG_FILE_NAME);
        let sink = FileSink::new(SinkConfig::new(&path));

        match sink.append(REPORT) {
            Err(LogError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_hints_uses_executable_directory() {
        let hints = LocationHints {
            executable: Some(PathBuf::from("/opt/hostprobe/hostprobe")),
            invoked_path: None,
            working_dir: Some(PathBuf::from("/tmp")),
        };

        let sink = FileSink::from_hints(&hints).unwrap();
        assert_eq!(sink.path(), Path::new("/opt/hostprobe").join(LOG_FILE_NAME));
    }
}
