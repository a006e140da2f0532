//! redb-based storage for the sheet collections
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `collections` | collection name | JSON-serialized item list | Whole-collection blobs |
//! | `revisions` | collection name | `u64` | Check-and-set counters |
//!
//! Exactly two collection keys exist (`employers`, `cases`), each holding
//! the full JSON-serialized collection. Every save overwrites the whole
//! blob; the revision counter is the only concession to concurrent
//! writers: a save must present the revision it read, and a mismatch is
//! rejected instead of silently winning.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::Versioned;
use shared::models::{Case, Employer};

/// Table for collection blobs: key = collection name, value = JSON item list
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Table for revision counters: key = collection name, value = revision
const REVISIONS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("revisions");

const EMPLOYERS_KEY: &str = "employers";
const CASES_KEY: &str = "cases";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Revision conflict: expected {expected}, found {found}")]
    RevisionConflict { expected: u64, found: u64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable versioned store holding the employer and case collections.
#[derive(Clone)]
pub struct SheetDb {
    db: Arc<Database>,
}

impl SheetDb {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "sheet database opened");
        Ok(Self { db: Arc::new(db) })
    }

    pub fn load_employers(&self) -> StoreResult<Versioned<Employer>> {
        self.load_collection(EMPLOYERS_KEY)
    }

    /// Replace the employer collection. Returns the new revision.
    pub fn save_employers(&self, items: &[Employer], expected: u64) -> StoreResult<u64> {
        self.save_collection(EMPLOYERS_KEY, items, expected)
    }

    pub fn load_cases(&self) -> StoreResult<Versioned<Case>> {
        self.load_collection(CASES_KEY)
    }

    /// Replace the case collection. Returns the new revision.
    pub fn save_cases(&self, items: &[Case], expected: u64) -> StoreResult<u64> {
        self.save_collection(CASES_KEY, items, expected)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Versioned<T>> {
        let read_txn = self.db.begin_read()?;

        let table = match read_txn.open_table(COLLECTIONS_TABLE) {
            Ok(table) => table,
            // First read before any write: both tables are absent.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Versioned::empty()),
            Err(e) => return Err(e.into()),
        };

        let Some(blob) = table.get(key)? else {
            return Ok(Versioned::empty());
        };
        let items: Vec<T> = serde_json::from_slice(blob.value())?;

        let revisions = read_txn.open_table(REVISIONS_TABLE)?;
        let revision = revisions.get(key)?.map(|v| v.value()).unwrap_or(0);

        Ok(Versioned { revision, items })
    }

    fn save_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
        expected: u64,
    ) -> StoreResult<u64> {
        let blob = serde_json::to_vec(items)?;

        let write_txn = self.db.begin_write()?;
        let new_revision = {
            let mut revisions = write_txn.open_table(REVISIONS_TABLE)?;
            let found = revisions.get(key)?.map(|v| v.value()).unwrap_or(0);
            if found != expected {
                return Err(StoreError::RevisionConflict { expected, found });
            }
            let new_revision = found + 1;
            revisions.insert(key, new_revision)?;

            let mut collections = write_txn.open_table(COLLECTIONS_TABLE)?;
            collections.insert(key, blob.as_slice())?;
            new_revision
        };
        write_txn.commit()?;

        tracing::debug!(collection = key, revision = new_revision, items = items.len(), "collection saved");
        Ok(new_revision)
    }
}
