//! Store configuration
//!
//! Which persistence strategy a component talks to is an explicit value
//! handed to it, never a module-level constant: both strategies stay
//! constructible side by side, which is what lets the integration tests
//! run the same board against either one.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::store::{CollectionStore, LocalStore, RemoteStore};

/// Persistence strategy selection.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Durable on-disk fallback store.
    Local {
        /// redb database file path
        path: PathBuf,
        /// Artificial per-call latency, for exercising loading states
        /// against the fallback. Off by default.
        simulated_delay: Option<Duration>,
    },
    /// Remote sheet endpoint.
    Remote {
        /// Endpoint base URL (e.g. "https://script.example.com/exec")
        base_url: String,
        /// Request timeout
        timeout: Duration,
    },
}

impl StoreConfig {
    /// Local strategy with no simulated latency.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        StoreConfig::Local {
            path: path.into(),
            simulated_delay: None,
        }
    }

    /// Remote strategy with the default 30 s timeout.
    pub fn remote(base_url: impl Into<String>) -> Self {
        StoreConfig::Remote {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        if let StoreConfig::Local {
            simulated_delay, ..
        } = &mut self
        {
            *simulated_delay = Some(delay);
        }
        self
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        if let StoreConfig::Remote { timeout, .. } = &mut self {
            *timeout = value;
        }
        self
    }

    /// Build the configured store.
    pub fn build(&self) -> ClientResult<Arc<dyn CollectionStore>> {
        match self {
            StoreConfig::Local {
                path,
                simulated_delay,
            } => {
                let store = LocalStore::open(path, *simulated_delay)?;
                Ok(Arc::new(store))
            }
            StoreConfig::Remote { base_url, timeout } => {
                if base_url.is_empty() {
                    return Err(ClientError::Config("base_url is required".into()));
                }
                let store = RemoteStore::new(base_url, *timeout)?;
                Ok(Arc::new(store))
            }
        }
    }
}
