//! Domain model types (pure).
//!
//! Levels, categories and statements are immutable values built fresh for
//! every log call.

pub mod category;
pub mod error;
pub mod level;
pub mod statement;
pub mod text;

// Re-export for convenience
pub use category::LogCategory;
pub use error::{AppError, DestinationError};
pub use level::{LevelRange, LogLevel, ParseLevelError};
pub use statement::{StatementAssembler, DEFAULT_SEPARATOR};
pub use text::{combine, truncate_or_pad, truncate_or_pad_with};
