//! Severity levels and level ranges.
//!
//! Levels are ordered solely by their integer priority. Custom levels can be
//! inserted anywhere in the scale, including ties with predefined levels.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Severity of a log statement.
///
/// Every predefined level has a fixed priority and a colored-circle glyph.
/// [`LogLevel::Custom`] carries caller-supplied values:
///
/// ```
/// use prettylog::model::LogLevel;
///
/// let todo = LogLevel::custom("🟣", 200);
/// assert!(LogLevel::Debug < todo);
/// assert!(todo < LogLevel::Verbose);
/// ```
///
/// Equality, ordering and hashing only look at [`LogLevel::priority`], so a
/// custom level with priority 100 compares equal to [`LogLevel::Debug`].
#[derive(Debug, Clone)]
pub enum LogLevel {
    /// 🟤 Developer details, priority 100.
    Debug,
    /// 🔵 Extra context for staging builds, priority 300.
    Verbose,
    /// 🟢 Normal operation, priority 500.
    Info,
    /// 🟡 Something unexpected that the program recovered from, priority 700.
    Warning,
    /// 🔴 A failed operation, priority 900.
    Error,
    /// Business-relevant events. Shares the highest representable priority.
    KeyEvent,
    /// Caller-defined level; build with [`LogLevel::custom`].
    Custom {
        /// Shown in place of the colored circle. Should be a single emoji.
        glyph: String,
        /// Position on the priority scale.
        priority: i64,
    },
}

impl LogLevel {
    /// Statements meant for the local developer console only.
    pub const XCODE: LogLevel = LogLevel::Debug;
    /// Statements meant for staging environments and below.
    pub const STAGING: LogLevel = LogLevel::Verbose;
    /// Statements meant for every environment up to production.
    pub const PRODUCTION: LogLevel = LogLevel::Info;

    /// Every predefined level, lowest priority first.
    pub const PREDEFINED: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::KeyEvent,
    ];

    /// Level with its own glyph and priority.
    pub fn custom(glyph: impl Into<String>, priority: i64) -> Self {
        LogLevel::Custom {
            glyph: glyph.into(),
            priority,
        }
    }

    /// Priority used for filtering. Not unique across levels.
    pub fn priority(&self) -> i64 {
        match self {
            LogLevel::Debug => 100,
            LogLevel::Verbose => 300,
            LogLevel::Info => 500,
            LogLevel::Warning => 700,
            LogLevel::Error => 900,
            LogLevel::KeyEvent => i64::MAX,
            LogLevel::Custom { priority, .. } => *priority,
        }
    }

    /// Quickly glanceable representation of the level.
    pub fn glyph(&self) -> &str {
        match self {
            LogLevel::Debug => "🟤",
            LogLevel::Verbose => "🔵",
            LogLevel::Info => "🟢",
            LogLevel::Warning => "🟡",
            LogLevel::Error => "🔴",
            LogLevel::KeyEvent => "📊",
            LogLevel::Custom { glyph, .. } => glyph,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::KeyEvent => "key_event",
            LogLevel::Custom { .. } => "custom",
        }
    }

    fn min_sentinel() -> Self {
        LogLevel::custom("⏬", i64::MIN)
    }

    fn max_sentinel() -> Self {
        LogLevel::custom("⏫", i64::MAX)
    }
}

impl PartialEq for LogLevel {
    fn eq(&self, other: &Self) -> bool {
        self.priority() == other.priority()
    }
}

impl Eq for LogLevel {}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl Hash for LogLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.priority().hash(state);
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.name())
    }
}

/// Failed to parse a level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "xcode" => Ok(LogLevel::Debug),
            "verbose" | "staging" => Ok(LogLevel::Verbose),
            "info" | "production" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "key_event" | "key-event" | "keyevent" => Ok(LogLevel::KeyEvent),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Inclusive range of accepted levels, or nothing at all.
///
/// Only the named constructors are public, so the sentinel bounds used for
/// open-ended ranges never leak to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRange(Option<(LogLevel, LogLevel)>);

impl LevelRange {
    /// Matches no level. Useful for destinations that need user approval first.
    pub fn allow_none() -> Self {
        LevelRange(None)
    }

    /// Matches every level, custom ones included.
    pub fn allow_all() -> Self {
        LevelRange(Some((LogLevel::min_sentinel(), LogLevel::max_sentinel())))
    }

    /// Accepts `min` and everything above it.
    pub fn allow_from(min: LogLevel) -> Self {
        LevelRange(Some((min, LogLevel::max_sentinel())))
    }

    /// Accepts `max` and everything below it.
    pub fn allow_until(max: LogLevel) -> Self {
        LevelRange(Some((LogLevel::min_sentinel(), max)))
    }

    /// Accepts `min..=max`. An inverted pair matches nothing.
    pub fn between(min: LogLevel, max: LogLevel) -> Self {
        if min > max {
            return LevelRange::allow_none();
        }
        LevelRange(Some((min, max)))
    }

    /// `true` for [`LevelRange::allow_none`] and inverted [`LevelRange::between`] pairs.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Always `false` for [`LevelRange::allow_none`].
    pub fn contains(&self, level: &LogLevel) -> bool {
        match &self.0 {
            None => false,
            Some((min, max)) => min <= level && level <= max,
        }
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        LevelRange::allow_all()
    }
}
