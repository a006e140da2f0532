//! Case Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_date;

/// Board column a case sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "รอดำเนินการ")]
    Pending,
    #[serde(rename = "กำลังดำเนินการ")]
    InProgress,
    #[serde(rename = "เสร็จสิ้น")]
    Completed,
}

impl CaseStatus {
    /// Fixed column order of the board.
    pub const COLUMNS: [CaseStatus; 3] = [
        CaseStatus::Pending,
        CaseStatus::InProgress,
        CaseStatus::Completed,
    ];
}

/// How the administrative work is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Online,
    #[serde(rename = "In-person")]
    InPerson,
}

/// Checklist item owned by its parent case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

/// Attachment reference on a case.
///
/// `url` is a durable attachment-store key, resolvable for the lifetime
/// of the store rather than a single browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// Unit of administrative work tied to one worker/employer pair.
///
/// `worker_id`/`employer_id` are referential, not enforced; an orphaned
/// reference renders as "N/A" downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: i64,
    pub title: String,
    pub worker_id: i64,
    pub employer_id: i64,
    pub status: CaseStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub assignee: String,
    #[serde(default, with = "opt_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub documents: Vec<CaseDocument>,
    pub channel: Channel,
    pub notes: String,
}

impl Case {
    /// Completion ratio: completed tasks over total, 0 when no tasks.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        completed as f64 / self.tasks.len() as f64
    }

    /// Whether the case is past its due date.
    ///
    /// Always false once the case is `Completed`, regardless of the date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status == CaseStatus::Completed {
            return false;
        }
        crate::dates::is_overdue(self.due_date, today)
    }
}

/// Form input for creating a case from a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub template_key: String,
    pub worker_id: i64,
    pub employer_id: i64,
    #[serde(default)]
    pub assignee: String,
    #[serde(default, with = "opt_date")]
    pub due_date: Option<NaiveDate>,
}

/// Free-form field edit; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    pub title: Option<String>,
    pub assignee: Option<String>,
    #[serde(default, with = "opt_date")]
    pub due_date: Option<NaiveDate>,
    pub status: Option<CaseStatus>,
    pub channel: Option<Channel>,
    pub notes: Option<String>,
}
