//! Tracing setup for the UI and the headless CLI.
//!
//! The desktop app logs to stdout and to a per-launch file under
//! `.truthlens/logs`, keeping the newest [`MAX_LOG_FILES`]. The CLI logs to
//! stderr only so its stdout stays machine readable.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};

/// Maximum number of log files to retain.
pub const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "truthlens_";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static INSTALLED: OnceLock<LogTarget> = OnceLock::new();

type LocalTimer = fmt::time::OffsetTime<&'static [BorrowedFormatItem<'static>]>;

/// Where log events end up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// stdout plus a per-launch file, `info` by default.
    Desktop,
    /// stderr only, `warn` by default.
    Cli,
}

impl LogTarget {
    fn default_directive(self) -> &'static str {
        match self {
            LogTarget::Desktop => "info",
            LogTarget::Cli => "warn",
        }
    }
}

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Desktop logging: stdout and `.truthlens/logs/truthlens_<timestamp>.log`.
pub fn init() -> Result<(), LoggingError> {
    init_with(LogTarget::Desktop)
}

/// CLI logging: stderr only, so stdout stays machine readable.
pub fn init_stderr() -> Result<(), LoggingError> {
    init_with(LogTarget::Cli)
}

/// Install the global subscriber for `target`. Only the first call has an
/// effect; failures are returned so callers can carry on without logs.
pub fn init_with(target: LogTarget) -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let filter = build_env_filter(target.default_directive());
    match target {
        LogTarget::Desktop => {
            let log_dir = app_dirs::logs_dir()?;
            let log_path = log_dir.join(log_file_name(now_local_or_utc())?);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .map_err(|source| io_error("create log file", &log_path, source))?;
            let (file_writer, guard) = tracing_appender::non_blocking(file);
            prune_old_logs(&log_dir, MAX_LOG_FILES)?;
            let subscriber = Registry::default()
                .with(filter)
                .with(fmt::layer().with_timer(local_timer()).with_writer(std::io::stdout))
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(local_timer())
                        .with_writer(file_writer),
                );
            tracing::subscriber::set_global_default(subscriber)?;
            let _ = LOG_GUARD.set(guard);
            let _ = INSTALLED.set(target);
            tracing::info!("Writing logs to {}", log_path.display());
        }
        LogTarget::Cli => {
            let subscriber = Registry::default().with(filter).with(
                fmt::layer()
                    .with_timer(local_timer())
                    .with_writer(std::io::stderr),
            );
            tracing::subscriber::set_global_default(subscriber)?;
            let _ = INSTALLED.set(target);
        }
    }
    Ok(())
}

/// Delete all but the newest `keep` log files. Timestamped names sort
/// chronologically; files without our prefix are left alone.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let entries = fs::read_dir(dir).map_err(|source| io_error("read log directory", dir, source))?;
    let mut logs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_log_file(path))
        .collect();
    logs.sort_unstable_by(|a, b| b.file_name().cmp(&a.file_name()));
    for path in logs.into_iter().skip(keep) {
        fs::remove_file(&path).map_err(|source| io_error("remove old log file", &path, source))?;
    }
    Ok(())
}

fn is_log_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    path.is_file() && name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[BorrowedFormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}{}.log", now.format(NAME_FORMAT)?))
}

fn local_timer() -> LocalTimer {
    const EVENT_FORMAT: &[BorrowedFormatItem<'static>] =
        format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, EVENT_FORMAT)
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn build_env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn io_error(action: &'static str, path: &Path, source: std::io::Error) -> LoggingError {
    LoggingError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}
