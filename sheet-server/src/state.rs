//! Server state

use std::sync::Arc;

use anyhow::Context;

use desk_store::SheetDb;

use crate::config::Config;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SheetDb,
    pub config: Arc<Config>,
}

impl AppState {
    /// Open the sheet database under the configured work dir.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir).with_context(|| {
            format!("creating work dir {}", config.work_dir.display())
        })?;
        let db = SheetDb::open(config.db_path())
            .with_context(|| format!("opening sheet database {}", config.db_path().display()))?;

        Ok(Self {
            db,
            config: Arc::new(config.clone()),
        })
    }
}
