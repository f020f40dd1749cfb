//! Dispatch of one logical log call to its destinations.
//!
//! For each destination, in the order given: check the level range, render
//! the statement with or without sensitive content, and emit it if anything
//! remains. Destinations are independent. An error or panic in one is
//! reported through `tracing` and never reaches the caller.

use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use tracing::{trace, warn};

use crate::destination::{ConsoleLog, LogDestination};
use crate::model::{LogCategory, LogLevel, StatementAssembler};

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

/// What happened to one dispatch call, per destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Destinations that recorded the statement.
    pub emitted: usize,
    /// Destinations whose level range rejected the level.
    pub filtered: usize,
    /// Destinations skipped because nothing was left to log for them.
    pub empty: usize,
    /// Destinations that returned an error or panicked.
    pub failed: usize,
}

impl DispatchSummary {
    /// Number of destinations that were considered.
    pub fn total(&self) -> usize {
        self.emitted + self.filtered + self.empty + self.failed
    }
}

/// Send one statement to every destination that accepts it.
///
/// An empty destination list is a configuration mistake: it is reported as a
/// warning and nothing else happens.
pub fn dispatch<'a, I, D>(
    level: &LogLevel,
    category: &LogCategory,
    statement: &StatementAssembler,
    destinations: I,
) -> DispatchSummary
where
    I: IntoIterator<Item = &'a D>,
    D: LogDestination + ?Sized + 'a,
{
    let mut summary = DispatchSummary::default();

    for destination in destinations {
        if !destination.accepts(level) {
            trace!(destination = destination.name(), level = %level, "Level filtered");
            summary.filtered += 1;
            continue;
        }

        let Some(message) = statement.render(destination.allows_sensitive_content()) else {
            summary.empty += 1;
            continue;
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            destination.create_log(level, &message, category)
        }));

        match outcome {
            Ok(Ok(())) => summary.emitted += 1,
            Ok(Err(error)) => {
                warn!(destination = destination.name(), %error, "Log destination failed");
                summary.failed += 1;
            }
            Err(_) => {
                warn!(destination = destination.name(), "Log destination panicked");
                summary.failed += 1;
            }
        }
    }

    if summary.total() == 0 {
        warn!(
            level = %level,
            "No log destinations configured: the statement cannot be recorded"
        );
    }

    summary
}

/// Assemble a statement from fragments and dispatch it.
///
/// Absent or empty fragments are dropped before joining with `separator`.
pub fn dispatch_fragments<'a, M, S, T, U, I, D>(
    level: &LogLevel,
    category: &LogCategory,
    messages: M,
    sensitive_messages: S,
    separator: &str,
    destinations: I,
) -> DispatchSummary
where
    M: IntoIterator<Item = Option<T>>,
    S: IntoIterator<Item = Option<U>>,
    T: AsRef<str>,
    U: AsRef<str>,
    I: IntoIterator<Item = &'a D>,
    D: LogDestination + ?Sized + 'a,
{
    let statement = StatementAssembler::new(messages, sensitive_messages, separator);
    dispatch(level, category, &statement, destinations)
}

/// Entry point holding an explicitly configured set of destinations.
///
/// Build one at startup and pass it by reference; there is no global default.
///
/// ```
/// use prettylog::{Logger, LogCategory, StatementAssembler};
/// use prettylog::destination::ConsoleLog;
///
/// let logger = Logger::new(vec![Box::new(ConsoleLog::with_writer(std::io::sink()))]);
/// logger.info("Service started", &LogCategory::Service);
/// logger.warning(
///     StatementAssembler::new([Some("Login failed")], [Some("user=alice")], " - "),
///     &LogCategory::User,
/// );
/// ```
pub struct Logger {
    destinations: Vec<Box<dyn LogDestination>>,
}

impl Logger {
    /// Logger writing to `destinations`, in order.
    pub fn new(destinations: Vec<Box<dyn LogDestination>>) -> Self {
        Self { destinations }
    }

    /// Logger printing to stdout only.
    pub fn console() -> Self {
        Self::new(vec![Box::new(ConsoleLog::new())])
    }

    /// Configured destinations, in dispatch order.
    pub fn destinations(&self) -> &[Box<dyn LogDestination>] {
        &self.destinations
    }

    /// Log `statement` with any level, including custom ones.
    pub fn log(
        &self,
        level: &LogLevel,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        dispatch(level, category, &statement.into(), &self.destinations)
    }

    /// Log at [`LogLevel::Debug`].
    pub fn debug(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::Debug, statement, category)
    }

    /// Log at [`LogLevel::Verbose`].
    pub fn verbose(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::Verbose, statement, category)
    }

    /// Log at [`LogLevel::Info`].
    pub fn info(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::Info, statement, category)
    }

    /// Log at [`LogLevel::Warning`].
    pub fn warning(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::Warning, statement, category)
    }

    /// Log at [`LogLevel::Error`].
    pub fn error(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::Error, statement, category)
    }

    /// Key events carry no sensitive content and pass every open-ended range.
    pub fn key_event(&self, message: &str, category: &LogCategory) -> DispatchSummary {
        self.log(&LogLevel::KeyEvent, message, category)
    }

    /// Developer-console statements ([`LogLevel::XCODE`]).
    pub fn xcode(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::XCODE, statement, category)
    }

    /// Staging statements ([`LogLevel::STAGING`]).
    pub fn staging(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::STAGING, statement, category)
    }

    /// Production statements ([`LogLevel::PRODUCTION`]).
    pub fn production(
        &self,
        statement: impl Into<StatementAssembler>,
        category: &LogCategory,
    ) -> DispatchSummary {
        self.log(&LogLevel::PRODUCTION, statement, category)
    }

    /// Log an error at [`LogLevel::Error`]. `None` is a no-op.
    pub fn log_error(&self, error: Option<&dyn Error>, category: &LogCategory) -> DispatchSummary {
        self.log_error_as(&LogLevel::Error, error, category)
    }

    /// Log an error at `level`, e.g. a recoverable one as a warning.
    /// `None` is a no-op.
    pub fn log_error_as(
        &self,
        level: &LogLevel,
        error: Option<&dyn Error>,
        category: &LogCategory,
    ) -> DispatchSummary {
        match error {
            Some(error) => self.log(level, StatementAssembler::from_error(error), category),
            None => DispatchSummary::default(),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field(
                "destinations",
                &self.destinations.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
