//! tracing setup. The UI owns the screen, so it logs to a file; headless
//! commands log to stderr.

use std::path::Path;

use crossterm::tty::IsTty;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::errors::AppError;

pub const LOG_FILE_PREFIX: &str = "northwindDemo.log";

/// `RUST_LOG` wins over the configured level; a bad level falls back to info.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route `log` records from dependencies into tracing. Safe to call twice.
fn bridge_log() {
    let _ = tracing_log::LogTracer::init();
}

/// Log to stderr without colours when stderr is not a terminal.
pub fn init_stderr(level: &str) -> Result<(), AppError> {
    bridge_log();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_tty())
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| AppError::Logging(e.to_string()))
}

/// Log to a daily-rolling file under `dir`. Keep the guard alive for the
/// life of the program or buffered lines are lost.
pub fn init_file(level: &str, dir: &Path) -> Result<WorkerGuard, AppError> {
    bridge_log();
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(guard)
}
