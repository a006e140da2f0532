//! Case board state container
//!
//! Loads the full case and employer collections once, serves the three
//! status columns from memory, and persists the whole case collection
//! after every mutation. Mutations are applied immutably: locate the
//! case, compute its replacement, swap it into a fresh list, save.
//!
//! A save that loses the revision check means another session edited the
//! collection first; the board then re-fetches so its state matches the
//! store again, and the caller gets [`ClientError::Conflict`] to retry.

use std::sync::Arc;

use chrono::NaiveDate;

use shared::Versioned;
use shared::models::{
    Case, CaseDocument, CaseStatus, CaseUpdate, Employer, NewCase, Task, Worker, find_template,
};
use shared::next_id;

use crate::error::{ClientError, ClientResult};
use crate::store::CollectionStore;

pub struct CaseBoard {
    store: Arc<dyn CollectionStore>,
    cases: Versioned<Case>,
    employers: Versioned<Employer>,
}

impl CaseBoard {
    /// Hydrate the board from the store.
    pub async fn load(store: Arc<dyn CollectionStore>) -> ClientResult<Self> {
        let cases = store.fetch_cases().await?;
        let employers = store.fetch_employers().await?;
        tracing::info!(
            cases = cases.items.len(),
            employers = employers.items.len(),
            "case board hydrated"
        );
        Ok(Self {
            store,
            cases,
            employers,
        })
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases.items
    }

    pub fn employers(&self) -> &[Employer] {
        &self.employers.items
    }

    /// Cases in one board column, in collection order.
    pub fn column(&self, status: CaseStatus) -> Vec<&Case> {
        self.cases.items.iter().filter(|c| c.status == status).collect()
    }

    pub fn find_case(&self, case_id: i64) -> Option<&Case> {
        self.cases.items.iter().find(|c| c.id == case_id)
    }

    /// Worker lookup across every employer's worker list.
    pub fn find_worker(&self, worker_id: i64) -> Option<&Worker> {
        self.employers
            .items
            .iter()
            .flat_map(|e| e.workers.iter())
            .find(|w| w.id == worker_id)
    }

    pub fn find_employer(&self, employer_id: i64) -> Option<&Employer> {
        self.employers.items.iter().find(|e| e.id == employer_id)
    }

    /// Re-fetch both collections, discarding unsaved divergence.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.cases = self.store.fetch_cases().await?;
        self.employers = self.store.fetch_employers().await?;
        Ok(())
    }

    /// Create a case from a template.
    ///
    /// The template key, worker and employer must all resolve before
    /// anything is persisted. Title is the template title and
    /// the worker's Thai name joined with " - "; the case starts Pending
    /// with no tasks or documents and the template's channel and note.
    pub async fn create_case(&mut self, input: NewCase) -> ClientResult<i64> {
        let template = find_template(&input.template_key).ok_or_else(|| {
            ClientError::Validation(format!("unknown template key: {}", input.template_key))
        })?;
        let worker = self.find_worker(input.worker_id).ok_or_else(|| {
            ClientError::Validation(format!("unknown worker id: {}", input.worker_id))
        })?;
        if self.find_employer(input.employer_id).is_none() {
            return Err(ClientError::Validation(format!(
                "unknown employer id: {}",
                input.employer_id
            )));
        }

        let case = Case {
            id: next_id(),
            title: format!("{} - {}", template.title, worker.name),
            worker_id: input.worker_id,
            employer_id: input.employer_id,
            status: CaseStatus::Pending,
            tasks: vec![],
            assignee: input.assignee,
            due_date: input.due_date,
            documents: vec![],
            channel: template.channel,
            notes: template.default_note.to_string(),
        };
        let case_id = case.id;

        tracing::info!(case_id, template = template.key, "case created");
        self.cases.items.push(case);
        self.persist_cases().await?;
        Ok(case_id)
    }

    /// Apply a free-form field edit.
    pub async fn update_case(&mut self, case_id: i64, update: CaseUpdate) -> ClientResult<()> {
        self.mutate_case(case_id, |case| {
            let mut case = case.clone();
            if let Some(title) = update.title {
                case.title = title;
            }
            if let Some(assignee) = update.assignee {
                case.assignee = assignee;
            }
            if let Some(due_date) = update.due_date {
                case.due_date = Some(due_date);
            }
            if let Some(status) = update.status {
                case.status = status;
            }
            if let Some(channel) = update.channel {
                case.channel = channel;
            }
            if let Some(notes) = update.notes {
                case.notes = notes;
            }
            Ok(case)
        })
        .await
    }

    /// Flip one task's completed flag, leaving every other task alone.
    pub async fn toggle_task(&mut self, case_id: i64, task_id: i64) -> ClientResult<()> {
        self.mutate_case(case_id, |case| {
            require_task(case, task_id)?;
            let mut case = case.clone();
            case.tasks = case
                .tasks
                .into_iter()
                .map(|t| {
                    if t.id == task_id {
                        Task {
                            completed: !t.completed,
                            ..t
                        }
                    } else {
                        t
                    }
                })
                .collect();
            Ok(case)
        })
        .await
    }

    /// Append a task. Blank descriptions are rejected.
    pub async fn add_task(&mut self, case_id: i64, description: &str) -> ClientResult<i64> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ClientError::Validation(
                "task description must not be blank".into(),
            ));
        }
        let task = Task {
            id: next_id(),
            description: description.to_string(),
            completed: false,
        };
        let task_id = task.id;
        self.mutate_case(case_id, move |case| {
            let mut case = case.clone();
            case.tasks.push(task);
            Ok(case)
        })
        .await?;
        Ok(task_id)
    }

    pub async fn rename_task(
        &mut self,
        case_id: i64,
        task_id: i64,
        description: &str,
    ) -> ClientResult<()> {
        let description = description.to_string();
        self.mutate_case(case_id, move |case| {
            require_task(case, task_id)?;
            let mut case = case.clone();
            case.tasks = case
                .tasks
                .into_iter()
                .map(|t| {
                    if t.id == task_id {
                        Task {
                            description: description.clone(),
                            ..t
                        }
                    } else {
                        t
                    }
                })
                .collect();
            Ok(case)
        })
        .await
    }

    /// Remove exactly the task with `task_id`, preserving order.
    pub async fn remove_task(&mut self, case_id: i64, task_id: i64) -> ClientResult<()> {
        self.mutate_case(case_id, move |case| {
            require_task(case, task_id)?;
            let mut case = case.clone();
            case.tasks.retain(|t| t.id != task_id);
            Ok(case)
        })
        .await
    }

    /// Record an attachment on the case.
    ///
    /// `url` is a durable attachment-store key (see
    /// [`crate::attachments`]), not a session-local object reference.
    pub async fn attach_document(
        &mut self,
        case_id: i64,
        name: &str,
        url: &str,
    ) -> ClientResult<i64> {
        let document = CaseDocument {
            id: next_id(),
            name: name.to_string(),
            url: url.to_string(),
        };
        let document_id = document.id;
        self.mutate_case(case_id, move |case| {
            let mut case = case.clone();
            case.documents.push(document);
            Ok(case)
        })
        .await?;
        Ok(document_id)
    }

    /// Remove exactly the document with `document_id`, preserving order.
    pub async fn remove_document(&mut self, case_id: i64, document_id: i64) -> ClientResult<()> {
        self.mutate_case(case_id, move |case| {
            if !case.documents.iter().any(|d| d.id == document_id) {
                return Err(ClientError::NotFound(format!(
                    "document {document_id} not found on case {}",
                    case.id
                )));
            }
            let mut case = case.clone();
            case.documents.retain(|d| d.id != document_id);
            Ok(case)
        })
        .await
    }

    /// Progress of a case on this board (completed tasks / total).
    pub fn progress(&self, case_id: i64) -> Option<f64> {
        self.find_case(case_id).map(Case::progress)
    }

    /// Overdue flag of a case on this board.
    pub fn is_overdue(&self, case_id: i64, today: NaiveDate) -> Option<bool> {
        self.find_case(case_id).map(|c| c.is_overdue(today))
    }

    async fn mutate_case(
        &mut self,
        case_id: i64,
        mutate: impl FnOnce(&Case) -> ClientResult<Case>,
    ) -> ClientResult<()> {
        let index = self
            .cases
            .items
            .iter()
            .position(|c| c.id == case_id)
            .ok_or_else(|| ClientError::NotFound(format!("case {case_id} not found")))?;

        let updated = mutate(&self.cases.items[index])?;
        self.cases.items[index] = updated;
        self.persist_cases().await
    }

    async fn persist_cases(&mut self) -> ClientResult<()> {
        match self
            .store
            .save_cases(&self.cases.items, self.cases.revision)
            .await
        {
            Ok(revision) => {
                self.cases.revision = revision;
                Ok(())
            }
            Err(ClientError::Conflict) => {
                tracing::warn!(
                    revision = self.cases.revision,
                    "case save lost revision check; re-fetching collection"
                );
                self.cases = self.store.fetch_cases().await?;
                Err(ClientError::Conflict)
            }
            Err(other) => Err(other),
        }
    }
}

fn require_task(case: &Case, task_id: i64) -> ClientResult<()> {
    if case.tasks.iter().any(|t| t.id == task_id) {
        Ok(())
    } else {
        Err(ClientError::NotFound(format!(
            "task {task_id} not found on case {}",
            case.id
        )))
    }
}
