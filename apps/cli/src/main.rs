//! `hostprobe` - print a one-shot inventory of the local host.

use anyhow::Context;
use clap::Parser;
use hostprobe_log::{FileSink, LogError};
use hostprobe_system::Collector;

#[derive(Debug, Parser)]
#[command(
    name = "hostprobe",
    version,
    about = "Print a one-shot inventory of this host",
    long_about = "Print host name, memory, processor counts, fixed disks and the \
                  five busiest processes. Sampling CPU usage takes about one second."
)]
struct Cli {
    /// Also append the report to hostprobe.log next to the executable
    #[arg(long = "log-info", alias = "loginfo")]
    log_info: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = hostprobe_log::init() {
        eprintln!("warning: diagnostics disabled: {e}");
    }

    let snapshot = Collector::system()
        .collect()
        .context("could not collect host inventory")?;
    let report = hostprobe_system::render(&snapshot);

    println!("{report}");

    if cli.log_info {
        append_log(&report);
    }

    Ok(())
}

/// Best effort: the report is already on stdout
fn append_log(report: &str) {
    let result = FileSink::next_to_executable().and_then(|sink| {
        tracing::debug!(path = %sink.path().display(), "appending report");
        sink.append(report)
    });

    if let Err(e) = result {
        eprintln!("{}", log_warning(&e));
    }
}

fn log_warning(error: &LogError) -> String {
    match error {
        LogError::Io { path, source } => {
            format!("warning: could not write log file {}: {source}", path.display())
        }
        other => format!("warning: could not write log file: {other}"),
    }
}
