//! Shared types for the labor-document case desk
//!
//! Domain records (employers, workers, cases), the sheet-endpoint wire
//! protocol, and the date/id helpers used by both the client and the
//! sheet server.

pub mod api;
pub mod dates;
pub mod id;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use api::{ErrorBody, SaveRequest, SaveResponse, Versioned};
pub use id::next_id;
