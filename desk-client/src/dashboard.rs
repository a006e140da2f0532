//! Dashboard derivations
//!
//! The dashboard never derives document statuses — those arrive stored
//! on the records. It derives only the day countdowns used for the
//! notification list and the per-employer worker sort.

use chrono::NaiveDate;

use shared::dates::days_remaining;
use shared::models::{DocumentStatus, Employer, Worker, WorkerDocumentKind};

/// One row of the expiring-documents notification list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryAlert {
    pub employer_id: i64,
    pub employer_name: String,
    pub worker_id: i64,
    pub worker_name: String,
    pub kind: WorkerDocumentKind,
    pub expiry_date: NaiveDate,
    pub status: DocumentStatus,
    /// Negative once the document has expired.
    pub days_remaining: i64,
}

impl ExpiryAlert {
    pub fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }

    /// User-facing countdown, as the dashboard renders it.
    pub fn headline(&self) -> String {
        if self.is_expired() {
            format!("หมดอายุแล้ว ({})", self.expiry_date)
        } else {
            format!(
                "เหลือ {} วัน (หมดอายุ {})",
                self.days_remaining, self.expiry_date
            )
        }
    }
}

/// Aggregate every worker document in `Expiring Soon` or `Expired`
/// status across all employers, soonest/most-overdue first.
pub fn expiry_alerts(employers: &[Employer], today: NaiveDate) -> Vec<ExpiryAlert> {
    let mut alerts: Vec<ExpiryAlert> = employers
        .iter()
        .flat_map(|employer| {
            employer.workers.iter().flat_map(move |worker| {
                worker
                    .documents
                    .iter()
                    .filter(|doc| doc.status.needs_attention())
                    .map(move |doc| ExpiryAlert {
                        employer_id: employer.id,
                        employer_name: employer.name_th.clone(),
                        worker_id: worker.id,
                        worker_name: worker.name.clone(),
                        kind: doc.kind,
                        expiry_date: doc.expiry_date,
                        status: doc.status,
                        days_remaining: days_remaining(doc.expiry_date, today),
                    })
            })
        })
        .collect();
    alerts.sort_by_key(|a| a.days_remaining);
    alerts
}

/// Sort key for an employer's worker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerSortKey {
    Name,
    ExpiryDate,
}

/// Sorted view of a worker list.
///
/// Under `ExpiryDate`, workers with no documents sort last regardless
/// of direction; ties keep collection order (stable sort).
pub fn sort_workers(workers: &[Worker], key: WorkerSortKey) -> Vec<&Worker> {
    let mut sorted: Vec<&Worker> = workers.iter().collect();
    match key {
        WorkerSortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        WorkerSortKey::ExpiryDate => sorted.sort_by(|a, b| {
            match (a.soonest_expiry(), b.soonest_expiry()) {
                (None, None) => std::cmp::Ordering::Equal,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (Some(_), None) => std::cmp::Ordering::Less,
                (Some(ea), Some(eb)) => ea.cmp(&eb),
            }
        }),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        Address, EmployerType, ResolutionType, WorkerDocument,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn worker(id: i64, name: &str, docs: Vec<WorkerDocument>) -> Worker {
        Worker {
            id,
            prefix: "นาย".into(),
            prefix_en: "Mr.".into(),
            name: name.into(),
            name_en: name.into(),
            nationality: "Myanmar".into(),
            photo_url: String::new(),
            dob: None,
            passport_no: "MA1".into(),
            passport_issue_date: None,
            passport_expiry_date: None,
            visa_no: "V1".into(),
            visa_issue_place: String::new(),
            visa_issue_date: None,
            visa_expiry_date: None,
            work_permit_issue_date: None,
            work_permit_expiry_date: None,
            resolution_type: ResolutionType::MouFirstTwoYears,
            documents: docs,
        }
    }

    fn doc(kind: WorkerDocumentKind, expiry: NaiveDate, status: DocumentStatus) -> WorkerDocument {
        WorkerDocument {
            kind,
            expiry_date: expiry,
            status,
        }
    }

    fn employer(id: i64, name: &str, workers: Vec<Worker>) -> Employer {
        Employer {
            id,
            employer_type: EmployerType::Juristic,
            tax_id: "0105500000000".into(),
            email: "hr@example.co.th".into(),
            password: None,
            reference_code: "REF".into(),
            phone: "02".into(),
            prefix_th: "บจก.".into(),
            name_th: name.into(),
            prefix_en: "Co.".into(),
            name_en: name.into(),
            business_type_th: String::new(),
            business_type_en: String::new(),
            job_description_th: String::new(),
            job_description_en: String::new(),
            address_th: Address::default(),
            address_en: Address::default(),
            wage: 363.0,
            employment_area: String::new(),
            branch_type: None,
            branch_name: None,
            registration_date: None,
            registered_capital: None,
            directors: vec![],
            workers,
            documents: vec![],
        }
    }

    #[test]
    fn alerts_cover_only_attention_statuses() {
        let today = date(2026, 8, 28);
        let employers = vec![employer(
            3,
            "สยามก่อสร้าง",
            vec![worker(
                7,
                "Somchai",
                vec![
                    doc(WorkerDocumentKind::Passport, date(2027, 8, 1), DocumentStatus::Active),
                    doc(WorkerDocumentKind::Visa, date(2026, 9, 7), DocumentStatus::ExpiringSoon),
                    doc(WorkerDocumentKind::WorkPermit, date(2026, 8, 25), DocumentStatus::Expired),
                ],
            )],
        )];

        let alerts = expiry_alerts(&employers, today);
        assert_eq!(alerts.len(), 2);
        // Most-overdue first.
        assert_eq!(alerts[0].kind, WorkerDocumentKind::WorkPermit);
        assert_eq!(alerts[0].days_remaining, -3);
        assert!(alerts[0].is_expired());
        assert!(alerts[0].headline().starts_with("หมดอายุแล้ว"));

        assert_eq!(alerts[1].kind, WorkerDocumentKind::Visa);
        assert_eq!(alerts[1].days_remaining, 10);
        assert_eq!(alerts[1].headline(), "เหลือ 10 วัน (หมดอายุ 2026-09-07)");
    }

    #[test]
    fn alerts_sort_ascending_across_employers() {
        let today = date(2026, 8, 28);
        let employers = vec![
            employer(
                1,
                "A",
                vec![worker(
                    10,
                    "Win",
                    vec![doc(WorkerDocumentKind::Visa, date(2026, 9, 20), DocumentStatus::ExpiringSoon)],
                )],
            ),
            employer(
                2,
                "B",
                vec![worker(
                    11,
                    "Aye",
                    vec![doc(WorkerDocumentKind::Passport, date(2026, 9, 1), DocumentStatus::ExpiringSoon)],
                )],
            ),
        ];

        let alerts = expiry_alerts(&employers, today);
        assert_eq!(alerts[0].worker_id, 11);
        assert_eq!(alerts[1].worker_id, 10);
    }

    #[test]
    fn expiry_sort_places_soonest_first_and_undocumented_last() {
        let workers = vec![
            worker(1, "NoDocs", vec![]),
            worker(
                2,
                "Later",
                vec![doc(WorkerDocumentKind::Visa, date(2026, 12, 1), DocumentStatus::Active)],
            ),
            worker(
                3,
                "Sooner",
                vec![doc(WorkerDocumentKind::Visa, date(2026, 9, 1), DocumentStatus::ExpiringSoon)],
            ),
        ];

        let sorted = sort_workers(&workers, WorkerSortKey::ExpiryDate);
        assert_eq!(
            sorted.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn name_sort_is_alphabetical() {
        let workers = vec![
            worker(1, "Zaw", vec![]),
            worker(2, "Aye", vec![]),
        ];
        let sorted = sort_workers(&workers, WorkerSortKey::Name);
        assert_eq!(sorted[0].id, 2);
    }
}
