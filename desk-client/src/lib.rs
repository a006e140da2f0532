//! Client-side services for the labor-document case desk
//!
//! Everything a front-end needs between its views and the sheet data:
//! the persistence adapter (local redb fallback or the remote sheet
//! endpoint, selected by injected [`StoreConfig`]), the case-board state
//! container, dashboard expiry derivations, the employer directory, the
//! durable attachment store, and the (disabled) assist capability.

pub mod assist;
pub mod attachments;
pub mod board;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod registry;
pub mod store;

// Re-export main types
pub use assist::{Assist, DisabledAssist, TaskSuggestion};
pub use attachments::{AttachmentStore, FsAttachmentStore};
pub use board::CaseBoard;
pub use config::StoreConfig;
pub use dashboard::{ExpiryAlert, WorkerSortKey, expiry_alerts, sort_workers};
pub use error::{ClientError, ClientResult};
pub use registry::EmployerDirectory;
pub use store::{CollectionStore, LocalStore, RemoteStore};
