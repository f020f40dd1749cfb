//! PrettyLog
//!
//! Log statements with a level emoji, an aligned category column and a
//! timestamp, filtered per destination by severity and by whether the
//! destination may see sensitive content.
//!
//! The pure core lives in [`model`] (levels, categories, statement assembly)
//! and [`dispatch`] (fan-out to destinations). Side effects are confined to
//! the [`destination`] implementations.

pub mod config;
pub mod destination;
pub mod dispatch;
pub mod logging;
pub mod model;

pub use destination::LogDestination;
pub use dispatch::{dispatch, dispatch_fragments, DispatchSummary, Logger};
pub use model::{LevelRange, LogCategory, LogLevel, StatementAssembler};
