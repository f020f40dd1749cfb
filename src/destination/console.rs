//! Console destination.
//!
//! Prints `HH:MM:SS.mmm <category> <glyph> <message>` with the category
//! right-aligned in a fixed-width column so statements line up.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local, TimeZone};

use super::LogDestination;
use crate::model::text::join_present;
use crate::model::{DestinationError, LevelRange, LogCategory, LogLevel};

/// Width of the category column.
pub const DEFAULT_CATEGORY_WIDTH: usize = 20;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Writes designed log lines to stdout or any other writer.
///
/// Accepts every level and sensitive content unless configured otherwise.
pub struct ConsoleLog {
    writer: Mutex<Box<dyn Write + Send>>,
    level_range: LevelRange,
    allows_sensitive_content: bool,
    category_width: usize,
}

impl ConsoleLog {
    /// Console destination writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console destination writing to `writer`, accepting every level.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            level_range: LevelRange::allow_all(),
            allows_sensitive_content: true,
            category_width: DEFAULT_CATEGORY_WIDTH,
        }
    }

    /// Restrict the recorded levels.
    pub fn with_level_range(mut self, level_range: LevelRange) -> Self {
        self.level_range = level_range;
        self
    }

    /// Allow or withhold sensitive fragments.
    pub fn with_sensitive_content(mut self, allowed: bool) -> Self {
        self.allows_sensitive_content = allowed;
        self
    }

    /// Width of the category column; `0` drops the column.
    pub fn with_category_width(mut self, width: usize) -> Self {
        self.category_width = width;
        self
    }

    /// Width of the category column.
    pub fn category_width(&self) -> usize {
        self.category_width
    }

    /// Assemble one console line for the given time.
    pub fn format_line<Tz>(
        &self,
        timestamp: &DateTime<Tz>,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let time = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let column = category.truncated_or_padded(self.category_width);
        let prefix = join_present([time.as_str(), column.as_str(), level.glyph()], " ");
        join_present([prefix.as_str(), message], " ")
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLog")
            .field("level_range", &self.level_range)
            .field("allows_sensitive_content", &self.allows_sensitive_content)
            .field("category_width", &self.category_width)
            .finish_non_exhaustive()
    }
}

impl LogDestination for ConsoleLog {
    fn name(&self) -> &str {
        "console"
    }

    fn create_log(
        &self,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> Result<(), DestinationError> {
        let line = self.format_line(&Local::now(), level, message, category);
        let mut writer = self.writer.lock().map_err(|_| DestinationError::Poisoned)?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    fn level_range(&self) -> LevelRange {
        self.level_range.clone()
    }

    fn allows_sensitive_content(&self) -> bool {
        self.allows_sensitive_content
    }
}
