//! Log categories: descriptive titles for log statements.

use std::fmt;

use super::text::truncate_or_pad;

/// Title shown next to each log statement.
///
/// Custom categories are plain values:
///
/// ```
/// use prettylog::model::LogCategory;
///
/// let todo = LogCategory::custom("To Do");
/// assert_eq!(todo.name(), "To Do");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LogCategory {
    /// "App State"
    AppState,
    /// "Debug"
    Debug,
    /// "General"
    General,
    /// "Manager"
    Manager,
    /// "Service"
    Service,
    /// "Storage"
    Storage,
    /// Renders as an empty name.
    #[default]
    Uncategorized,
    /// "User Action"
    User,
    /// "View"
    View,
    /// Caller-supplied name.
    Custom(String),
}

impl LogCategory {
    /// Category with a caller-supplied name.
    pub fn custom(name: impl Into<String>) -> Self {
        LogCategory::Custom(name.into())
    }

    /// Display name, empty for [`LogCategory::Uncategorized`].
    pub fn name(&self) -> &str {
        match self {
            LogCategory::AppState => "App State",
            LogCategory::Debug => "Debug",
            LogCategory::General => "General",
            LogCategory::Manager => "Manager",
            LogCategory::Service => "Service",
            LogCategory::Storage => "Storage",
            LogCategory::Uncategorized => "",
            LogCategory::User => "User Action",
            LogCategory::View => "View",
            LogCategory::Custom(name) => name,
        }
    }

    /// The name right-aligned in a field of exactly `width` characters.
    pub fn truncated_or_padded(&self, width: usize) -> String {
        truncate_or_pad(self.name(), width)
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
