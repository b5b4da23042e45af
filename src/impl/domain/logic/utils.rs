use chrono::{Datelike, Months, NaiveDate};
use fractic_server_error::{CriticalError, ServerError};

/// Returns the first day of the month of the given date.
pub(crate) fn month_start_date(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("copying a NaiveDate with overridden day=1 should never fail")
}

/// Returns the first day of the month `offset` months after the month of
/// `anchor`.
pub(crate) fn month_start_after(anchor: NaiveDate, offset: u32) -> Result<NaiveDate, ServerError> {
    month_start_date(anchor)
        .checked_add_months(Months::new(offset))
        .ok_or_else(|| {
            CriticalError::with_debug(
                "month offset calculation unexpectedly resulted in invalid date",
                &format!("anchor: {}, offset: {}", anchor, offset),
            )
        })
}

/// Number of whole months covered by the inclusive range [start, end]
/// (2025-08-01..2028-07-31 is 36 months). Returns `None` if the range is
/// empty.
pub(crate) fn whole_months_between(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    let exclusive_end = end.succ_opt()?;
    if exclusive_end <= start {
        return None;
    }
    let mut months = (exclusive_end.year() - start.year()) * 12 + exclusive_end.month() as i32
        - start.month() as i32;
    if exclusive_end.day() < start.day() {
        months -= 1;
    }
    u32::try_from(months).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_start_after_rolls_over_years() {
        assert_eq!(month_start_after(d(2025, 8, 1), 0).unwrap(), d(2025, 8, 1));
        assert_eq!(month_start_after(d(2025, 8, 1), 5).unwrap(), d(2026, 1, 1));
        assert_eq!(month_start_after(d(2025, 8, 17), 71).unwrap(), d(2031, 7, 1));
    }

    #[test]
    fn whole_months_counts_inclusive_ranges() {
        assert_eq!(whole_months_between(d(2025, 8, 1), d(2028, 7, 31)), Some(36));
        assert_eq!(whole_months_between(d(2025, 1, 1), d(2026, 1, 1)), Some(12));
        assert_eq!(whole_months_between(d(2025, 11, 15), d(2026, 11, 14)), Some(12));
        assert_eq!(whole_months_between(d(2025, 3, 1), d(2025, 3, 10)), Some(0));
        assert_eq!(whole_months_between(d(2025, 3, 1), d(2025, 2, 1)), None);
    }
}
