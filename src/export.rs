//! Tab-separated export boundary.
//!
//! Downstream detection tooling ingests registrations as tab-separated rows:
//! `status, date, employeeId, projectId, departmentId, workCategory,
//! HH:MM start, HH:MM end, work duration, break duration, holiday`. This
//! module renders that shape losslessly from the core types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::TimeRegistration;

/// The status column emitted for every exported registration.
const EXPORT_STATUS: &str = "0";

/// Formats a fractional hour of day as `HH:MM` (floor hours, rounded minutes).
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesynth::export::format_clock_time;
///
/// assert_eq!(format_clock_time(Decimal::new(85, 1)), "08:30");
/// assert_eq!(format_clock_time(Decimal::from(16)), "16:00");
/// ```
pub fn format_clock_time(time: Decimal) -> String {
    let hours = time.trunc();
    let minutes = ((time - hours) * Decimal::from(60)).round();
    format!(
        "{:02}:{:02}",
        hours.to_i64().unwrap_or(0),
        minutes.to_i64().unwrap_or(0)
    )
}

/// Formats an hour count as `<n>h` with trailing zeros stripped.
pub fn format_duration(hours: Decimal) -> String {
    format!("{}h", hours.normalize())
}

/// Renders one registration as a tab-separated export row.
pub fn to_tsv_row(registration: &TimeRegistration) -> String {
    [
        EXPORT_STATUS.to_string(),
        registration.date.to_string(),
        registration.employee_id.clone(),
        registration.project_id.clone(),
        registration.department_id.clone(),
        registration.work_category.clone(),
        format_clock_time(registration.start_time),
        format_clock_time(registration.end_time),
        format_duration(registration.work_duration),
        format_duration(registration.break_duration),
        if registration.public_holiday { "Yes" } else { "No" }.to_string(),
    ]
    .join("\t")
}

/// Renders a batch as newline-joined tab-separated rows.
pub fn to_tsv(registrations: &[TimeRegistration]) -> String {
    registrations
        .iter()
        .map(to_tsv_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a batch restricted to an optional inclusive date window.
///
/// Either bound may be omitted; an omitted bound leaves that side open.
pub fn to_tsv_filtered(
    registrations: &[TimeRegistration],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> String {
    let filtered: Vec<_> = registrations
        .iter()
        .filter(|reg| start.is_none_or(|s| reg.date >= s))
        .filter(|reg| end.is_none_or(|e| reg.date <= e))
        .cloned()
        .collect();
    to_tsv(&filtered)
}
