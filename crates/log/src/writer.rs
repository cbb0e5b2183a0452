//! Append-only file writer

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

use crate::core::{LogError, LogResult};

/// Shared handle to a log file opened in append mode
///
/// Write errors hit inside the subscriber are recorded and surfaced by
/// [`AppendWriter::finish`].
#[derive(Debug, Clone)]
pub struct AppendWriter {
    inner: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    path: PathBuf,
    file: Mutex<File>,
    error: Mutex<Option<io::Error>>,
}

impl AppendWriter {
    /// Open `path` for appending, creating it when absent
    pub fn open(path: impl Into<PathBuf>) -> LogResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io(&path, e))?;

        Ok(Self {
            inner: Arc::new(Shared {
                path,
                file: Mutex::new(file),
                error: Mutex::new(None),
            }),
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Flush the file and report the first write error, if any
    pub fn finish(self) -> LogResult<()> {
        let flushed = self.inner.file.lock().flush();
        if let Some(source) = self.inner.error.lock().take() {
            return Err(LogError::io(&self.inner.path, source));
        }
        flushed.map_err(|e| LogError::io(&self.inner.path, e))
    }
}

/// Writer handed out per event
#[derive(Debug)]
pub struct EntryWriter<'a> {
    shared: &'a Shared,
}

impl Shared {
    fn record(&self, error: io::Error) -> io::Error {
        let kind = error.kind();
        let mut slot = self.error.lock();
        if slot.is_none() {
            *slot = Some(error);
        }
        kind.into()
    }
}

impl Write for EntryWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.shared.file.lock().write(buf) {
            Err(e) if e.kind() != io::ErrorKind::Interrupted => Err(self.shared.record(e)),
            other => other,
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.shared
            .file
            .lock()
            .flush()
            .map_err(|e| self.shared.record(e))
    }
}

impl<'a> MakeWriter<'a> for AppendWriter {
    type Writer = EntryWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        EntryWriter {
            shared: &self.inner,
        }
    }
}
