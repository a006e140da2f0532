//! Employer directory
//!
//! The data-entry view's state container. Same shape as the case board:
//! hydrate the employer collection, mutate it immutably, persist the
//! whole list, reconcile on a lost revision check.

use std::sync::Arc;

use shared::Versioned;
use shared::models::{Employer, Worker};
use shared::next_id;

use crate::error::{ClientError, ClientResult};
use crate::store::CollectionStore;

pub struct EmployerDirectory {
    store: Arc<dyn CollectionStore>,
    employers: Versioned<Employer>,
}

impl EmployerDirectory {
    pub async fn load(store: Arc<dyn CollectionStore>) -> ClientResult<Self> {
        let employers = store.fetch_employers().await?;
        Ok(Self { store, employers })
    }

    pub fn employers(&self) -> &[Employer] {
        &self.employers.items
    }

    pub fn find(&self, employer_id: i64) -> Option<&Employer> {
        self.employers.items.iter().find(|e| e.id == employer_id)
    }

    /// Register a new employer; the draft's id is assigned here.
    pub async fn add_employer(&mut self, mut draft: Employer) -> ClientResult<i64> {
        draft.id = next_id();
        for worker in &mut draft.workers {
            worker.id = next_id();
        }
        let employer_id = draft.id;

        tracing::info!(employer_id, "employer registered");
        self.employers.items.push(draft);
        self.persist().await?;
        Ok(employer_id)
    }

    /// Replace an employer record wholesale (form-submit semantics).
    pub async fn update_employer(&mut self, updated: Employer) -> ClientResult<()> {
        let index = self
            .employers
            .items
            .iter()
            .position(|e| e.id == updated.id)
            .ok_or_else(|| ClientError::NotFound(format!("employer {} not found", updated.id)))?;
        self.employers.items[index] = updated;
        self.persist().await
    }

    /// Delete by filtering out of the owning collection; no tombstone.
    pub async fn remove_employer(&mut self, employer_id: i64) -> ClientResult<()> {
        if self.find(employer_id).is_none() {
            return Err(ClientError::NotFound(format!(
                "employer {employer_id} not found"
            )));
        }
        self.employers.items.retain(|e| e.id != employer_id);
        self.persist().await
    }

    /// Attach a worker to an employer; the draft's id is assigned here.
    pub async fn add_worker(&mut self, employer_id: i64, mut draft: Worker) -> ClientResult<i64> {
        let index = self
            .employers
            .items
            .iter()
            .position(|e| e.id == employer_id)
            .ok_or_else(|| ClientError::NotFound(format!("employer {employer_id} not found")))?;

        draft.id = next_id();
        let worker_id = draft.id;

        let mut employer = self.employers.items[index].clone();
        employer.workers.push(draft);
        self.employers.items[index] = employer;
        self.persist().await?;
        Ok(worker_id)
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.employers = self.store.fetch_employers().await?;
        Ok(())
    }

    async fn persist(&mut self) -> ClientResult<()> {
        match self
            .store
            .save_employers(&self.employers.items, self.employers.revision)
            .await
        {
            Ok(revision) => {
                self.employers.revision = revision;
                Ok(())
            }
            Err(ClientError::Conflict) => {
                tracing::warn!(
                    revision = self.employers.revision,
                    "employer save lost revision check; re-fetching collection"
                );
                self.employers = self.store.fetch_employers().await?;
                Err(ClientError::Conflict)
            }
            Err(other) => Err(other),
        }
    }
}
