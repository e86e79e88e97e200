//! Calendar day enumeration for the generation interval.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Saturdays and Sundays.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesynth::generation::is_weekend;
///
/// // 2024-01-06 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// // 2024-01-08 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Enumerates the calendar days in an inclusive date interval.
///
/// The result is ordered and duplicate-free. When `skip_weekends` is set,
/// Saturdays and Sundays are excluded from the base sequence; per-employee
/// weekend eligibility is applied separately by the registration generator.
/// An inverted interval (`end < start`) yields an empty vector rather than an
/// error, so the core never panics on unvalidated input.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesynth::generation::build_date_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // Monday
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();   // Sunday
///
/// assert_eq!(build_date_range(start, end, false).len(), 7);
/// assert_eq!(build_date_range(start, end, true).len(), 5);
/// ```
pub fn build_date_range(start: NaiveDate, end: NaiveDate, skip_weekends: bool) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if !skip_weekends || !is_weekend(day) {
            days.push(day);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}
