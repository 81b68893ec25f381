//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stdout and to a
//! size-rotated file in the app log dir. `log` records are bridged in, so
//! crates using either facade end up in the same file. On Android the
//! records go to logcat instead.

mod writer;

use std::path::PathBuf;
use std::sync::OnceLock;

use thiserror::Error;

pub use writer::RollingWriter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log dir unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Rotation limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggerOptions {
    pub max_file_bytes: u64,
    pub max_files: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_files: 5,
        }
    }
}

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

#[cfg(not(target_os = "android"))]
mod desktop {
    use tracing_subscriber::fmt::time::FormatTime;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use super::{LoggerError, RollingWriter};

    struct LocalTimer;

    impl FormatTime for LocalTimer {
        fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
            write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
        }
    }

    pub(super) fn install(writer: RollingWriter) -> Result<(), LoggerError> {
        let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
            from_env
        } else if cfg!(debug_assertions) {
            EnvFilter::new("info,tao=error,hyper=warn,reqwest=warn")
        } else {
            EnvFilter::new("info,tao=error,hyper=warn,reqwest=warn,rusqlite=warn")
        };

        let file_layer = fmt::layer()
            .with_timer(LocalTimer)
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_writer(writer);

        let stdout_layer = fmt::layer()
            .with_timer(LocalTimer)
            .with_ansi(true)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stdout);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(stdout_layer)
            .try_init()
            .map_err(|_| LoggerError::AlreadyInitialized)
    }
}

/// Set up logging for `app_name` under `log_dir`.
///
/// Must be called once, early in app setup.
pub fn init_logger(log_dir: PathBuf, app_name: &str, options: LoggerOptions) -> Result<(), LoggerError> {
    if ensure_init().is_ok() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingWriter::new(&log_dir, app_name, options.max_file_bytes, options.max_files)?;
    let path = writer.current_path();

    #[cfg(not(target_os = "android"))]
    desktop::install(writer)?;

    #[cfg(target_os = "android")]
    {
        drop(writer);
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
    }

    let _ = LOG_FILE.set(path.clone());
    tracing::info!(path = %path.display(), "Logger initialized");
    Ok(())
}

fn ensure_init() -> Result<(), LoggerError> {
    LOG_FILE.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    log::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    log::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    log::error!("{}", msg);
    Ok(())
}
