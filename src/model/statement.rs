//! Statement assembly from public and sensitive fragments.

use std::error::Error;

use super::text::combine;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Combined public and sensitive parts of one log statement.
///
/// Fragments are joined once at construction. [`StatementAssembler::render`]
/// is the single place where sensitive content is added or left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementAssembler {
    message: Option<String>,
    sensitive_message: Option<String>,
    separator: String,
}

impl StatementAssembler {
    /// Build from ordered public and sensitive fragments.
    ///
    /// ```
    /// use prettylog::model::StatementAssembler;
    ///
    /// let statement = StatementAssembler::new([Some("A")], [Some("B")], " - ");
    /// assert_eq!(statement.render(true).as_deref(), Some("A - B"));
    /// assert_eq!(statement.render(false).as_deref(), Some("A"));
    /// ```
    pub fn new<M, S, T, U>(messages: M, sensitive_messages: S, separator: &str) -> Self
    where
        M: IntoIterator<Item = Option<T>>,
        S: IntoIterator<Item = Option<U>>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            message: combine(messages, separator),
            sensitive_message: combine(sensitive_messages, separator),
            separator: separator.to_string(),
        }
    }

    /// Public fragments only, joined by [`DEFAULT_SEPARATOR`].
    pub fn public<M, T>(messages: M) -> Self
    where
        M: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        Self::new(messages, std::iter::empty::<Option<&str>>(), DEFAULT_SEPARATOR)
    }

    /// Sensitive fragments only, joined by [`DEFAULT_SEPARATOR`].
    pub fn sensitive<S, U>(sensitive_messages: S) -> Self
    where
        S: IntoIterator<Item = Option<U>>,
        U: AsRef<str>,
    {
        Self::new(
            std::iter::empty::<Option<&str>>(),
            sensitive_messages,
            DEFAULT_SEPARATOR,
        )
    }

    /// `"<display> (<debug>)"` of an error, as a public statement.
    pub fn from_error(error: &dyn Error) -> Self {
        Self::public([Some(format!("{error} ({error:?})"))])
    }

    /// Joined public fragments.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Joined sensitive fragments.
    pub fn sensitive_message(&self) -> Option<&str> {
        self.sensitive_message.as_deref()
    }

    /// Separator used for every join.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// `true` when neither part holds anything to log.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.sensitive_message.is_none()
    }

    /// The statement for one destination, or `None` if nothing is loggable.
    pub fn render(&self, include_sensitive: bool) -> Option<String> {
        if include_sensitive {
            combine(
                [self.message.as_deref(), self.sensitive_message.as_deref()],
                &self.separator,
            )
        } else {
            self.message.clone()
        }
    }
}

impl From<&str> for StatementAssembler {
    fn from(message: &str) -> Self {
        Self::public([Some(message)])
    }
}

impl From<String> for StatementAssembler {
    fn from(message: String) -> Self {
        Self::public([Some(message)])
    }
}
