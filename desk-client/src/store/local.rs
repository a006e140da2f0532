//! Local fallback store
//!
//! Wraps the redb-backed [`SheetDb`] so a client works without any
//! endpoint configured. Collection blobs are small (one agency's
//! records), so the synchronous redb calls run inline.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use desk_store::{SheetDb, StoreError};
use shared::Versioned;
use shared::models::{Case, Employer};

use crate::error::{ClientError, ClientResult};

use super::CollectionStore;

pub struct LocalStore {
    db: SheetDb,
    simulated_delay: Option<Duration>,
}

impl LocalStore {
    /// Open (or create) the fallback database at `path`.
    pub fn open(path: impl AsRef<Path>, simulated_delay: Option<Duration>) -> ClientResult<Self> {
        let db = SheetDb::open(path)?;
        Ok(Self {
            db,
            simulated_delay,
        })
    }

    async fn delay(&self) {
        if let Some(delay) = self.simulated_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn map_store_err(err: StoreError) -> ClientError {
    match err {
        StoreError::RevisionConflict { .. } => ClientError::Conflict,
        other => ClientError::Store(other),
    }
}

#[async_trait]
impl CollectionStore for LocalStore {
    async fn fetch_employers(&self) -> ClientResult<Versioned<Employer>> {
        self.delay().await;
        self.db.load_employers().map_err(map_store_err)
    }

    async fn save_employers(&self, items: &[Employer], revision: u64) -> ClientResult<u64> {
        self.delay().await;
        self.db.save_employers(items, revision).map_err(map_store_err)
    }

    async fn fetch_cases(&self) -> ClientResult<Versioned<Case>> {
        self.delay().await;
        self.db.load_cases().map_err(map_store_err)
    }

    async fn save_cases(&self, items: &[Case], revision: u64) -> ClientResult<u64> {
        self.delay().await;
        self.db.save_cases(items, revision).map_err(map_store_err)
    }
}
