//! Year-month parsing and the expiry-in-the-past rule.

use chrono::{Datelike, NaiveDate};

/// Parse a month-input value of the form `YYYY-MM`.
///
/// Returns the `(year, month)` pair, or `None` when the value does not have
/// that shape or the month is out of range.
///
/// # Example
///
/// ```
/// use formwell::predicate::parse_year_month;
///
/// assert_eq!(parse_year_month("2027-04"), Some((2027, 4)));
/// assert_eq!(parse_year_month("2027-13"), None);
/// assert_eq!(parse_year_month("04-2027"), None);
/// ```
pub fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// True when `(year, month)` falls strictly before the month containing
/// `today`. A card expiring in the current month is still valid.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use formwell::predicate::month_is_past;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// assert!(month_is_past((2026, 7), today));
/// assert!(!month_is_past((2026, 8), today));
/// assert!(!month_is_past((2026, 9), today));
/// ```
#[inline]
pub fn month_is_past((year, month): (i32, u32), today: NaiveDate) -> bool {
    year < today.year() || (year == today.year() && month < today.month())
}
