//! Serde helpers for sheet-shaped JSON
//!
//! Spreadsheet rows represent an absent date as an empty string, not
//! `null`. These adapters keep `Option<NaiveDate>` fields round-trippable
//! against that convention.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FMT: &str = "%Y-%m-%d";

/// `Option<NaiveDate>` <-> `"YYYY-MM-DD"` with `""`/`null` meaning `None`.
pub mod opt_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FMT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FMT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        #[serde(with = "opt_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn empty_string_reads_as_none() {
        let row: Row = serde_json::from_str(r#"{"date":""}"#).unwrap();
        assert_eq!(row.date, None);
    }

    #[test]
    fn null_reads_as_none() {
        let row: Row = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(row.date, None);
    }

    #[test]
    fn date_round_trips() {
        let row = Row {
            date: NaiveDate::from_ymd_opt(2026, 3, 31),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"date":"2026-03-31"}"#);
        assert_eq!(serde_json::from_str::<Row>(&json).unwrap(), row);
    }
}
