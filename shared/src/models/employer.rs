//! Employer Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_date;
use super::worker::{DocumentStatus, Worker};

/// Registered employer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployerType {
    #[serde(rename = "บุคคลธรรมดา")]
    Individual,
    #[serde(rename = "นิติบุคคล")]
    Juristic,
}

/// Branch classification for juristic employers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchType {
    #[serde(rename = "สำนักงานใหญ่")]
    HeadOffice,
    #[serde(rename = "สาขา")]
    Branch,
    #[serde(rename = "อื่นๆ")]
    Other,
}

/// Thai-format postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub house_no: String,
    pub moo: String,
    pub soi: String,
    pub road: String,
    pub subdistrict: String,
    pub district: String,
    pub province: String,
    pub postal_code: String,
}

/// Company director (juristic employers only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub name_th: String,
    pub name_en: String,
}

/// Registration document kind on an employer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployerDocumentKind {
    #[serde(rename = "หนังสือรับรองบริษัท")]
    CompanyCertificate,
    #[serde(rename = "ภ.พ.20")]
    PorPor20,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerDocument {
    #[serde(rename = "type")]
    pub kind: EmployerDocumentKind,
    pub expiry_date: NaiveDate,
    pub status: DocumentStatus,
}

/// Registered entity (individual or juristic) sponsoring migrant workers.
///
/// Bilingual name/business fields are interpreted as a personal name for
/// `Individual` and a company name for `Juristic`. Juristic employers
/// additionally carry branch/registration fields and a director list
/// (non-empty by convention, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: i64,
    pub employer_type: EmployerType,
    pub tax_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub reference_code: String,
    pub phone: String,

    pub prefix_th: String,
    pub name_th: String,
    pub prefix_en: String,
    pub name_en: String,

    pub business_type_th: String,
    pub business_type_en: String,
    pub job_description_th: String,
    pub job_description_en: String,

    pub address_th: Address,
    pub address_en: Address,

    pub wage: f64,
    pub employment_area: String,

    // -- Juristic-only fields --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_type: Option<BranchType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(default, with = "opt_date")]
    pub registration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_capital: Option<f64>,
    #[serde(default)]
    pub directors: Vec<Director>,

    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub documents: Vec<EmployerDocument>,
}

impl Employer {
    pub fn find_worker(&self, worker_id: i64) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == worker_id)
    }
}
