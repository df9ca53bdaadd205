//! Tracing setup: stderr plus a daily log file.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "country-explorer.log";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Local wall-clock timestamps with millisecond precision.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Directory holding the rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("country-explorer").join("logs"))
}

/// Build the filter: `RUST_LOG` wins over the configured level.
fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; dropping it flushes and stops file logging,
/// so the caller keeps it alive for the life of the process.
pub fn init(level: LogLevel) -> Option<WorkerGuard> {
    let stderr_layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_target(false);

    let file_writer = log_dir().and_then(|dir| match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        ))),
        Err(e) => {
            eprintln!("Log directory unavailable, logging to stderr only: {e}");
            None
        }
    });

    match file_writer {
        Some((writer, guard)) => {
            let file_layer = tracing_fmt::layer()
                .with_writer(writer)
                .with_timer(LocalTime)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter(level))
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter(level))
                .with(stderr_layer)
                .init();
            None
        }
    }
}
