// Shared fixtures for the integration suites.

use shared::models::{
    Address, Employer, EmployerType, ResolutionType, Worker,
};

pub fn employer_draft(name: &str) -> Employer {
    Employer {
        id: 0,
        employer_type: EmployerType::Juristic,
        tax_id: "0105500000001".into(),
        email: "hr@siamconstruction.co.th".into(),
        password: None,
        reference_code: "REF-2026-001".into(),
        phone: "021234567".into(),
        prefix_th: "บจก.".into(),
        name_th: name.into(),
        prefix_en: "Co., Ltd.".into(),
        name_en: "Siam Construction".into(),
        business_type_th: "รับเหมาก่อสร้าง".into(),
        business_type_en: "Construction".into(),
        job_description_th: "กรรมกร".into(),
        job_description_en: "Laborer".into(),
        address_th: Address {
            house_no: "99/1".into(),
            moo: "4".into(),
            soi: String::new(),
            road: "พระราม 2".into(),
            subdistrict: "แสมดำ".into(),
            district: "บางขุนเทียน".into(),
            province: "กรุงเทพมหานคร".into(),
            postal_code: "10150".into(),
        },
        address_en: Address::default(),
        wage: 363.0,
        employment_area: "กรุงเทพมหานคร".into(),
        branch_type: None,
        branch_name: None,
        registration_date: None,
        registered_capital: None,
        directors: vec![],
        workers: vec![],
        documents: vec![],
    }
}

pub fn worker_draft(name: &str) -> Worker {
    Worker {
        id: 0,
        prefix: "นาย".into(),
        prefix_en: "Mr.".into(),
        name: name.into(),
        name_en: "Somchai".into(),
        nationality: "Myanmar".into(),
        photo_url: String::new(),
        dob: None,
        passport_no: "MA1234567".into(),
        passport_issue_date: None,
        passport_expiry_date: None,
        visa_no: "TH-555".into(),
        visa_issue_place: "สมุทรสาคร".into(),
        visa_issue_date: None,
        visa_expiry_date: None,
        work_permit_issue_date: None,
        work_permit_expiry_date: None,
        resolution_type: ResolutionType::MouFirstTwoYears,
        documents: vec![],
    }
}
