//! Report log entry format
//!
//! Every entry starts with a fixed-width header:
//!
//! ```text
//! [2024-05-01 09:30:12] [sink         : 88 ] [INFO    ] [4242] <message>
//! ```

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use chrono::Local;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `strftime` pattern of the header timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timestamp without sub-second precision
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Event formatter producing the log entry header
#[derive(Debug, Clone)]
pub struct HeaderFormat<T = LocalTimestamp> {
    timer: T,
    module_label: Option<String>,
    pid: u32,
}

impl HeaderFormat {
    /// Header with local time and the current process id
    #[must_use]
    pub fn new() -> Self {
        Self {
            timer: LocalTimestamp,
            module_label: None,
            pid: std::process::id(),
        }
    }
}

impl Default for HeaderFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeaderFormat<T> {
    /// Replace the timestamp source
    pub fn with_timer<T2: FormatTime>(self, timer: T2) -> HeaderFormat<T2> {
        HeaderFormat {
            timer,
            module_label: self.module_label,
            pid: self.pid,
        }
    }

    /// Fix the module column instead of deriving it from the event
    #[must_use]
    pub fn with_module_label(mut self, label: Option<String>) -> Self {
        self.module_label = label;
        self
    }

    /// Override the process id column
    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    fn module_label<'a>(&'a self, metadata: &'static Metadata<'static>) -> &'a str {
        if let Some(label) = &self.module_label {
            return label;
        }

        metadata
            .file()
            .and_then(|file| Path::new(file).file_stem())
            .and_then(OsStr::to_str)
            .or_else(|| metadata.module_path().and_then(|path| path.rsplit("::").next()))
            .unwrap_or_else(|| metadata.target())
    }
}

impl<S, N, T> FormatEvent<S, N> for HeaderFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut timestamp = String::new();
        self.timer.format_time(&mut Writer::new(&mut timestamp))?;

        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;

        write!(
            writer,
            "[{timestamp}] [{:<12} : {:<3}] [{:<8}] [{}] {message}",
            self.module_label(metadata),
            metadata.line().unwrap_or(0),
            metadata.level().as_str(),
            self.pid,
        )?;

        // multi-line messages already carry their terminator
        if !message.ends_with('\n') {
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::Arc;

    struct FixedTime;

    impl FormatTime for FixedTime {
        fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
            w.write_str("2024-05-01 09:30:12")
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn capture<F: FnOnce()>(format: HeaderFormat<FixedTime>, f: F) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .event_format(format)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_header_layout() {
        let mut line = 0;
        let output = capture(HeaderFormat::new().with_timer(FixedTime).with_pid(4242), || {
            line = line!() + 1;
            tracing::info!("probe finished");
        });

        assert_eq!(
            output,
            format!("[2024-05-01 09:30:12] [format       : {line:<3}] [INFO    ] [4242] probe finished\n")
        );
    }

    #[test]
    fn test_multiline_message_is_not_padded() {
        let output = capture(
            HeaderFormat::new()
                .with_timer(FixedTime)
                .with_pid(7)
                .with_module_label(Some("main".into())),
            || tracing::warn!("\nline one\nline two\n"),
        );

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("[2024-05-01 09:30:12] [main         : "));
        assert!(header.ends_with("] [WARN    ] [7] "));
        assert_eq!(lines.collect::<Vec<_>>(), vec!["line one", "line two"]);
        assert!(output.ends_with("line two\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_local_timestamp_shape() {
        let mut out = String::new();
        LocalTimestamp.format_time(&mut Writer::new(&mut out)).unwrap();

        assert_eq!(out.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&out, TIMESTAMP_FORMAT).is_ok());
    }
}
