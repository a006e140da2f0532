//! Sheet proxy server
//!
//! HTTP counterparty for the desk clients' remote persistence mode. It
//! serves the two sheet collections over the Apps-Script-shaped contract
//! (`GET ?action=`, `POST {action, revision, payload}` as text/plain)
//! on top of the durable versioned store.

pub mod config;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use logger::init_logger;
pub use routes::build_app;
pub use state::AppState;
