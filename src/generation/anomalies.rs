//! Post-processing anomaly injection.
//!
//! The injector walks the generated batch once, flips an independent
//! Bernoulli coin per registration, and on success applies exactly one field
//! mutation, tagging the registration with the severity and a human-readable
//! label of the mutated attribute. It never raises: degenerate draws (a
//! numerical mutation on a registration without numericals, a date shift for
//! a weekend-eligible employee) degrade to no-ops instead.

use std::collections::HashMap;

use chrono::{Datelike, Duration, Weekday};
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::{
    AnomalyConfig, AnomalyInfo, AnomalySeverity, AnomalyType, EmployeeWorkPattern,
    TimeRegistration,
};

use super::date_range::is_weekend;

/// The project label forced by the weak project mutation, outside any normal
/// project set.
pub const SENTINEL_PROJECT_ID: &str = "Z";

/// Mutates a controlled fraction of the batch into labelled anomalies.
///
/// With `AnomalyType::None` the batch passes through unchanged. Otherwise
/// each registration is independently selected with the configured
/// probability (clamped into `[0, 1]`); `AnomalyType::Both` dispatches 50/50
/// between the weak and strong mutation sets. Patterns are consulted only to
/// decide weekend eligibility for the strong date shift.
///
/// Registrations are consumed and rebuilt, so the pre-anomaly values are not
/// retained anywhere.
pub fn inject_anomalies(
    registrations: Vec<TimeRegistration>,
    patterns: &[EmployeeWorkPattern],
    config: &AnomalyConfig,
    rng: &mut impl Rng,
) -> Vec<TimeRegistration> {
    if config.anomaly_type == AnomalyType::None {
        return registrations;
    }
    let probability = config.probability.clamp(0.0, 1.0);
    let weekend_eligible: HashMap<&str, bool> = patterns
        .iter()
        .map(|p| (p.employee_id.as_str(), p.can_work_weekends))
        .collect();

    registrations
        .into_iter()
        .map(|registration| {
            if !rng.gen_bool(probability) {
                return registration;
            }
            let severity = match config.anomaly_type {
                AnomalyType::None => return registration,
                AnomalyType::Weak => AnomalySeverity::Weak,
                AnomalyType::Strong => AnomalySeverity::Strong,
                AnomalyType::Both => {
                    if rng.gen_bool(0.5) {
                        AnomalySeverity::Weak
                    } else {
                        AnomalySeverity::Strong
                    }
                }
            };
            match severity {
                AnomalySeverity::Weak => introduce_weak_anomaly(registration, rng),
                AnomalySeverity::Strong => {
                    introduce_strong_anomaly(registration, &weekend_eligible, rng)
                }
            }
        })
        .collect()
}

fn mark(registration: &mut TimeRegistration, severity: AnomalySeverity, field: impl Into<String>) {
    registration.anomaly = Some(AnomalyInfo {
        severity,
        field: field.into(),
    });
}

/// Nudges a value by `adjustment` toward the farther of the two bounds,
/// clamped into `[min, max]`.
fn adjust_time_value(current: Decimal, min: Decimal, max: Decimal, adjustment: Decimal) -> Decimal {
    if current - min < max - current {
        (current - adjustment).max(min)
    } else {
        (current + adjustment).min(max)
    }
}

/// Mutates one numerical entry by `±delta`, or marks the anomaly without
/// changing anything when the registration carries no numericals.
fn mutate_numerical(
    registration: &mut TimeRegistration,
    delta: Decimal,
    severity: AnomalySeverity,
    rng: &mut impl Rng,
) {
    if registration.numericals.is_empty() {
        mark(registration, severity, "Numerical");
        return;
    }
    let index = rng.gen_range(0..registration.numericals.len());
    let signed = if rng.gen_bool(0.5) { delta } else { -delta };
    registration.numericals[index].value += signed;
    let field = format!("Numerical ({})", registration.numericals[index].name);
    mark(registration, severity, field);
}

fn introduce_weak_anomaly(
    mut registration: TimeRegistration,
    rng: &mut impl Rng,
) -> TimeRegistration {
    let one = Decimal::ONE;
    match rng.gen_range(0..6u8) {
        0 => {
            registration.start_time =
                adjust_time_value(registration.start_time, Decimal::from(6), Decimal::from(12), one);
            registration.recompute_work_duration();
            mark(&mut registration, AnomalySeverity::Weak, "Start Time");
        }
        1 => {
            registration.end_time =
                adjust_time_value(registration.end_time, Decimal::from(14), Decimal::from(20), one);
            registration.recompute_work_duration();
            mark(&mut registration, AnomalySeverity::Weak, "End Time");
        }
        2 => {
            let half = Decimal::new(5, 1);
            let signed = if rng.gen_bool(0.5) { half } else { -half };
            registration.break_duration += signed;
            registration.recompute_work_duration();
            mark(&mut registration, AnomalySeverity::Weak, "Break Duration");
        }
        3 => {
            let signed = if rng.gen_bool(0.5) { one } else { -one };
            registration.work_duration += signed;
            mark(&mut registration, AnomalySeverity::Weak, "Work Duration");
        }
        4 => mutate_numerical(&mut registration, one, AnomalySeverity::Weak, rng),
        _ => {
            registration.project_id = SENTINEL_PROJECT_ID.to_string();
            mark(&mut registration, AnomalySeverity::Weak, "Project");
        }
    }
    registration
}

fn introduce_strong_anomaly(
    mut registration: TimeRegistration,
    weekend_eligible: &HashMap<&str, bool>,
    rng: &mut impl Rng,
) -> TimeRegistration {
    let three = Decimal::from(3);
    match rng.gen_range(0..3u8) {
        0 => {
            let shift = if rng.gen_bool(0.5) { -three } else { three };
            registration.start_time += shift;
            registration.end_time += shift;
            registration.recompute_work_duration();
            mark(&mut registration, AnomalySeverity::Strong, "Time Shift");
        }
        1 => {
            // A weekend-boundary shift is only an anomaly for employees whose
            // pattern forbids weekend work; otherwise the draw is a no-op.
            let eligible = weekend_eligible
                .get(registration.employee_id.as_str())
                .copied()
                .unwrap_or(false);
            if !eligible {
                if is_weekend(registration.date) {
                    let days_back = if registration.date.weekday() == Weekday::Sun {
                        2
                    } else {
                        1
                    };
                    registration.date = registration.date - Duration::days(days_back);
                } else {
                    let days_until_saturday =
                        6 - i64::from(registration.date.weekday().num_days_from_sunday());
                    registration.date = registration.date + Duration::days(days_until_saturday);
                }
                mark(&mut registration, AnomalySeverity::Strong, "Date (Weekend)");
            }
        }
        _ => mutate_numerical(&mut registration, three, AnomalySeverity::Strong, rng),
    }
    registration
}
