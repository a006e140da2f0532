//! Day-granularity date arithmetic
//!
//! All comparisons treat both dates as midnight-truncated; the expiry
//! countdown is the signed whole-day difference.

use chrono::NaiveDate;

/// Days until `expiry`, negative once it has passed.
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// A due date is overdue when it is strictly before today.
///
/// `None` (no due date set) is never overdue.
pub fn is_overdue(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(due_date, Some(due) if due < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_remaining_counts_whole_days() {
        let today = date(2026, 8, 28);
        assert_eq!(days_remaining(date(2026, 9, 7), today), 10);
        assert_eq!(days_remaining(today, today), 0);
        assert_eq!(days_remaining(date(2026, 8, 25), today), -3);
    }

    #[test]
    fn overdue_boundary_is_exclusive_of_today() {
        let today = date(2026, 8, 28);
        assert!(is_overdue(Some(date(2026, 8, 27)), today));
        assert!(!is_overdue(Some(today), today));
        assert!(!is_overdue(Some(date(2026, 8, 29)), today));
        assert!(!is_overdue(None, today));
    }
}
