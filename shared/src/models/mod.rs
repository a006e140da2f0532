//! Data models
//!
//! Shared between desk-client and sheet-server (via the sheet API).
//! JSON field names are camelCase and enum literals keep the Thai
//! spellings of the source spreadsheet, so persisted collections stay
//! readable by the sheet tooling. All IDs are `i64` millisecond
//! timestamps (see [`crate::id`]).

pub mod case;
pub mod employer;
pub mod serde_helpers;
pub mod template;
pub mod worker;

// Re-exports
pub use case::*;
pub use employer::*;
pub use template::*;
pub use worker::*;
