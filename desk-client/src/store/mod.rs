//! Persistence adapter
//!
//! One trait, two strategies. Every fetch returns an entire collection;
//! every save replaces it, presenting the revision it read. There is no
//! partial update and no server-side merge; the revision check is the
//! only thing standing between two sessions and a lost update.

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use async_trait::async_trait;

use shared::Versioned;
use shared::models::{Case, Employer};

use crate::error::ClientResult;

/// Whole-collection data access for the two sheet collections.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn fetch_employers(&self) -> ClientResult<Versioned<Employer>>;

    /// Replace the employer collection. `revision` must match the stored
    /// one; returns the new revision.
    async fn save_employers(&self, items: &[Employer], revision: u64) -> ClientResult<u64>;

    async fn fetch_cases(&self) -> ClientResult<Versioned<Case>>;

    /// Replace the case collection. Same revision contract as
    /// [`CollectionStore::save_employers`].
    async fn save_cases(&self, items: &[Case], revision: u64) -> ClientResult<u64>;
}
