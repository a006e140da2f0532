//! Worker Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_date;
use crate::dates::days_remaining;

/// Compliance state of a tracked document.
///
/// Stored on the record by the data source; readers render it as-is
/// (the dashboard derives only days-remaining, never the status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

impl DocumentStatus {
    /// Derive a status from an expiry date at data-entry time.
    ///
    /// `warn_days` is the caller's alert window; a document expiring
    /// within it (inclusive) is `ExpiringSoon`.
    pub fn derive(expiry: NaiveDate, today: NaiveDate, warn_days: i64) -> Self {
        let days = days_remaining(expiry, today);
        if days < 0 {
            DocumentStatus::Expired
        } else if days <= warn_days {
            DocumentStatus::ExpiringSoon
        } else {
            DocumentStatus::Active
        }
    }

    /// True for the states the notification list aggregates.
    pub fn needs_attention(self) -> bool {
        matches!(self, DocumentStatus::ExpiringSoon | DocumentStatus::Expired)
    }
}

/// Tracked document kind on a worker record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerDocumentKind {
    #[serde(rename = "หนังสือเดินทาง")]
    Passport,
    #[serde(rename = "วีซ่า")]
    Visa,
    #[serde(rename = "ใบอนุญาตทำงาน")]
    WorkPermit,
}

/// A worker document tagged with its compliance state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDocument {
    #[serde(rename = "type")]
    pub kind: WorkerDocumentKind,
    pub expiry_date: NaiveDate,
    pub status: DocumentStatus,
}

/// Cabinet-resolution track a worker is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionType {
    #[serde(rename = "มติ ครม. 24 ก.ย. 67 (ขึ้นทะเบียน) - สิ้นสุด 31 มี.ค. 69")]
    C1Register2569,
    #[serde(rename = "มติ ครม. 24 ก.ย. 67 (ต่ออายุ) - สิ้นสุด 13 ก.พ. 70")]
    C2Renew2570,
    #[serde(rename = "MOU นำเข้า 2 ปีแรก")]
    MouFirstTwoYears,
    #[serde(rename = "MOU นำเข้า ปี 3-4")]
    MouYear3To4,
}

/// Migrant worker tracked for document compliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i64,
    /// Thai name prefix (นาย / นาง / นางสาว)
    pub prefix: String,
    /// English name prefix (Mr. / Mrs. / Miss)
    pub prefix_en: String,
    pub name: String,
    pub name_en: String,
    pub nationality: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default, with = "opt_date")]
    pub dob: Option<NaiveDate>,
    pub passport_no: String,
    #[serde(default, with = "opt_date")]
    pub passport_issue_date: Option<NaiveDate>,
    #[serde(default, with = "opt_date")]
    pub passport_expiry_date: Option<NaiveDate>,
    pub visa_no: String,
    #[serde(default)]
    pub visa_issue_place: String,
    #[serde(default, with = "opt_date")]
    pub visa_issue_date: Option<NaiveDate>,
    #[serde(default, with = "opt_date")]
    pub visa_expiry_date: Option<NaiveDate>,
    #[serde(default, with = "opt_date")]
    pub work_permit_issue_date: Option<NaiveDate>,
    #[serde(default, with = "opt_date")]
    pub work_permit_expiry_date: Option<NaiveDate>,
    pub resolution_type: ResolutionType,
    #[serde(default)]
    pub documents: Vec<WorkerDocument>,
}

impl Worker {
    /// Soonest expiry date across the worker's tracked documents.
    ///
    /// `None` when the worker has no documents; such workers sort last
    /// in the dashboard regardless of sort direction.
    pub fn soonest_expiry(&self) -> Option<NaiveDate> {
        self.documents.iter().map(|d| d.expiry_date).min()
    }
}
