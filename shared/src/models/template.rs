//! Case templates
//!
//! Predefined case types supplying the default title pattern, channel
//! and note text. The set is fixed; cases are always created from one.

use super::case::Channel;

/// A predefined case type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub channel: Channel,
    pub default_note: &'static str,
}

/// The built-in template catalog.
pub const CASE_TEMPLATES: [CaseTemplate; 6] = [
    CaseTemplate {
        key: "renew_wp",
        title: "ต่ออายุใบอนุญาตการทำงาน",
        channel: Channel::Online,
        default_note: "ดำเนินการผ่านระบบ e-Work Permit: http://eworkpermit.doe.go.th/",
    },
    CaseTemplate {
        key: "renew_visa",
        title: "ต่ออายุ VISA",
        channel: Channel::InPerson,
        default_note: "เตรียมเอกสารฉบับจริงทั้งหมดเพื่อยื่นที่สำนักงานตรวจคนเข้าเมือง",
    },
    CaseTemplate {
        key: "report_90",
        title: "รายงานตัว 90 วัน",
        channel: Channel::InPerson,
        default_note: "สามารถรายงานตัวก่อนวันนัดได้ 15 วัน และหลังวันนัดได้ 7 วัน",
    },
    CaseTemplate {
        key: "new_wp",
        title: "ทำใบอนุญาตทำงานใหม่",
        channel: Channel::Online,
        default_note: "ดำเนินการผ่านระบบ e-Work Permit: http://eworkpermit.doe.go.th/",
    },
    CaseTemplate {
        key: "notify_in",
        title: "แจ้งเข้าทำงาน",
        channel: Channel::Online,
        default_note: "แจ้งเข้าภายใน 15 วันนับจากวันที่เริ่มจ้าง",
    },
    CaseTemplate {
        key: "notify_out",
        title: "แจ้งออกจากงาน",
        channel: Channel::Online,
        default_note: "แจ้งออกภายใน 15 วันนับจากวันที่สิ้นสุดการจ้าง",
    },
];

/// Look up a template by key.
pub fn find_template(key: &str) -> Option<&'static CaseTemplate> {
    CASE_TEMPLATES.iter().find(|t| t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let template = find_template("renew_wp").unwrap();
        assert_eq!(template.title, "ต่ออายุใบอนุญาตการทำงาน");
        assert_eq!(template.channel, Channel::Online);
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(find_template("renew_passport").is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in CASE_TEMPLATES.iter().enumerate() {
            for b in &CASE_TEMPLATES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
