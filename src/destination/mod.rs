//! Log destinations: sinks that receive filtered, rendered statements.
//!
//! A destination declares which levels it accepts and whether it may see
//! sensitive content. The dispatcher enforces both before calling
//! [`LogDestination::create_log`].

pub mod backend;
pub mod console;

pub use backend::{BackendLog, BackendLogEntry, BackendTransport, EchoTransport};
pub use console::ConsoleLog;

use crate::model::{DestinationError, LevelRange, LogCategory, LogLevel};

/// A local or remote destination for log statements.
///
/// Implementations are configured once at construction and treated as
/// read-only afterwards. They must be safe to call from several threads;
/// the dispatcher provides no synchronization.
pub trait LogDestination: Send + Sync {
    /// Short human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Record one statement.
    ///
    /// Only called when [`LogDestination::accepts`] returned `true` and the
    /// rendered message is non-empty.
    fn create_log(
        &self,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> Result<(), DestinationError>;

    /// Levels this destination records. Defaults to every level.
    fn level_range(&self) -> LevelRange {
        LevelRange::allow_all()
    }

    /// Whether sensitive fragments may be included. Defaults to `true`.
    fn allows_sensitive_content(&self) -> bool {
        true
    }

    /// Whether `level` falls inside [`LogDestination::level_range`].
    fn accepts(&self, level: &LogLevel) -> bool {
        self.level_range().contains(level)
    }
}

impl<T: LogDestination + ?Sized> LogDestination for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_log(
        &self,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> Result<(), DestinationError> {
        (**self).create_log(level, message, category)
    }

    fn level_range(&self) -> LevelRange {
        (**self).level_range()
    }

    fn allows_sensitive_content(&self) -> bool {
        (**self).allows_sensitive_content()
    }

    fn accepts(&self, level: &LogLevel) -> bool {
        (**self).accepts(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl LogDestination for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn create_log(
            &self,
            _level: &LogLevel,
            _message: &str,
            _category: &LogCategory,
        ) -> Result<(), DestinationError> {
            Ok(())
        }
    }

    #[test]
    fn defaults_accept_everything_including_sensitive_content() {
        let destination = Silent;
        assert!(destination.allows_sensitive_content());
        assert_eq!(destination.level_range(), LevelRange::allow_all());
        for level in LogLevel::PREDEFINED {
            assert!(destination.accepts(&level));
        }
    }

    #[test]
    fn boxed_destination_forwards() {
        let boxed: Box<dyn LogDestination> = Box::new(Silent);
        assert_eq!(boxed.name(), "silent");
        assert!(boxed.accepts(&LogLevel::Error));
        assert!(boxed
            .create_log(&LogLevel::Info, "hi", &LogCategory::General)
            .is_ok());
    }
}
