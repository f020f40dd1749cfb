//! Tracing subscriber initialization for internal diagnostics.
//!
//! The library reports skipped or failing destinations as `tracing` events.
//! The `prettylog` binary writes those events to a file so they never mix
//! with the log statements it prints.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Subscriber writing diagnostics to `log_path`, without installing it.
///
/// Respects `RUST_LOG`, defaulting to `info`. Creates the log directory if it
/// doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path has no file name or the directory could
/// not be created.
pub fn file_subscriber(
    log_path: &Path,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .finish())
}

/// Install [`file_subscriber`] as the process-wide default.
///
/// Skipped destinations and failing sinks reported by
/// [`dispatch`](crate::dispatch()) end up in this file.
///
/// # Errors
///
/// Returns `LoggingError` if the subscriber could not be built or one was
/// already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::util::SubscriberInitExt;

    file_subscriber(log_path)?
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
