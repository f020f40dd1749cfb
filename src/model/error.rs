//! Error types for prettylog.
//!
//! Errors are defined with `thiserror` and compose through `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error of the `prettylog` binary
//!   - [`ConfigError`] - Config file reading/parsing failures
//!   - [`LoggingError`] - Internal tracing subscriber setup failures
//!   - `std::io::Error` - Everything else touching the terminal
//! - [`DestinationError`] - A single destination failed to record a statement
//!
//! # Recovery Strategy
//!
//! Destination errors are **never fatal**. The dispatcher reports them as
//! `tracing` warnings and moves on to the next destination; a logging call
//! never aborts the caller's control flow. Config and tracing setup errors
//! only occur at startup and do abort the binary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level error of the `prettylog` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A config file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The internal diagnostics subscriber could not be installed.
    #[error("Logging setup error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing to stdout or stderr failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of one destination while recording one statement.
///
/// Returned from [`LogDestination::create_log`](crate::destination::LogDestination::create_log)
/// and contained by the dispatcher.
///
/// # Examples
///
/// ```
/// use prettylog::model::error::DestinationError;
///
/// let err = DestinationError::Transport {
///     endpoint: "https://api.example.com/logs".to_string(),
///     reason: "connection refused".to_string(),
/// };
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, Error)]
pub enum DestinationError {
    /// Writing the formatted line failed (closed pipe, full disk).
    #[error("Failed to write log statement: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be encoded.
    #[error("Failed to encode log payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A remote destination could not deliver the payload.
    #[error("Failed to send log statement to {endpoint}: {reason}")]
    Transport {
        /// Where the payload was headed.
        endpoint: String,
        /// Transport-specific failure description.
        reason: String,
    },

    /// A writer lock was poisoned by a panic in another thread.
    #[error("Log writer lock poisoned")]
    Poisoned,
}
