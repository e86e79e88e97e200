//! Registration synthesis from work patterns.
//!
//! Each employee's registrations are drawn from that employee's pattern and
//! an eligible date pool. Dates are drawn without replacement so one employee
//! never books the same day twice within a generation call; when the pool is
//! exhausted before the requested count is reached, the employee simply gets
//! fewer registrations.

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{DatasetParams, EmployeeWorkPattern, TimeRegistration};

use super::date_range::build_date_range;

/// Independent probability that a registration lands on a public holiday.
pub const PUBLIC_HOLIDAY_PROBABILITY: f64 = 0.1;

/// Fixed offset applied when a drawn end time does not exceed the start time.
fn fallback_shift_hours() -> Decimal {
    Decimal::from(8)
}

/// Draws individual time registrations for every supplied pattern.
///
/// The eligible date pool per employee is the full generation interval,
/// narrowed to weekdays only when the global `skip_weekends` flag is set and
/// the employee is not weekend-eligible. Start and end times come from the
/// pattern's allowed sets; a drawn end time at or before the start is
/// replaced by `start + 8` to guarantee a usable shift. The derived
/// `work_duration` is deliberately left unclamped.
///
/// Registration ids are assigned in creation order across the whole batch.
/// Patterns with an empty allowed-set (only possible via a malformed cache
/// entry) yield no registrations rather than a panic.
pub fn generate_registrations(
    params: &DatasetParams,
    patterns: &[EmployeeWorkPattern],
    rng: &mut impl Rng,
) -> Vec<TimeRegistration> {
    if params.projects.is_empty() {
        warn!("no projects configured, generating no registrations");
        return Vec::new();
    }

    let all_days = build_date_range(params.start_date, params.end_date, false);
    let weekdays = build_date_range(params.start_date, params.end_date, true);

    let mut registrations = Vec::new();

    for (index, pattern) in patterns.iter().enumerate() {
        if !pattern.is_drawable() {
            warn!(
                employee_id = %pattern.employee_id,
                "pattern has an empty allowed-set, skipping employee"
            );
            continue;
        }

        let mut pool = if params.skip_weekends && !pattern.can_work_weekends {
            weekdays.clone()
        } else {
            all_days.clone()
        };

        for _ in 0..params.num_registrations_per_employee {
            if pool.is_empty() {
                break;
            }
            let date = pool.swap_remove(rng.gen_range(0..pool.len()));

            let Some(&start_time) = pattern.allowed_start_times.choose(rng) else {
                break;
            };
            let Some(&drawn_end) = pattern.allowed_end_times.choose(rng) else {
                break;
            };
            let end_time = if drawn_end > start_time {
                drawn_end
            } else {
                start_time + fallback_shift_hours()
            };
            let Some(&break_duration) = pattern.allowed_break_durations.choose(rng) else {
                break;
            };
            let Some(work_category) = pattern.allowed_work_categories.choose(rng).cloned() else {
                break;
            };

            let project_id = if params.randomize_assignments {
                params
                    .projects
                    .choose(rng)
                    .cloned()
                    .unwrap_or_default()
            } else {
                params.projects[index % params.projects.len()].clone()
            };

            registrations.push(TimeRegistration {
                registration_id: format!("reg-{}", registrations.len()),
                date,
                employee_id: pattern.employee_id.clone(),
                project_id,
                department_id: pattern.department_id.clone(),
                work_category,
                start_time,
                end_time,
                break_duration,
                work_duration: end_time - start_time - break_duration,
                public_holiday: rng.gen_bool(PUBLIC_HOLIDAY_PROBABILITY),
                numericals: Vec::new(),
                anomaly: None,
            });
        }
    }

    registrations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::is_weekend;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekday_pattern(employee: usize) -> EmployeeWorkPattern {
        EmployeeWorkPattern {
            employee_id: format!("employee-{employee}"),
            department_id: "IT".to_string(),
            allowed_start_times: vec![Decimal::from(8), Decimal::new(85, 1)],
            allowed_end_times: vec![Decimal::from(16), Decimal::new(165, 1)],
            allowed_break_durations: vec![Decimal::new(5, 1), Decimal::from(1)],
            allowed_work_categories: vec!["Development".to_string(), "Testing".to_string()],
            can_work_weekends: false,
        }
    }

    #[test]
    fn test_pool_exhaustion_degrades_gracefully() {
        // Mon 2024-01-01 through Sun 2024-01-07, weekends skipped: 5 eligible
        // days for a weekend-ineligible employee, 10 registrations requested.
        let mut rng = StdRng::seed_from_u64(1);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 7));
        params.num_employees = 1;
        params.num_registrations_per_employee = 10;
        let patterns = vec![weekday_pattern(0)];

        let registrations = generate_registrations(&params, &patterns, &mut rng);

        assert_eq!(registrations.len(), 5);
        let days: HashSet<_> = registrations.iter().map(|r| r.date).collect();
        assert_eq!(days.len(), 5);
        assert!(registrations.iter().all(|r| !is_weekend(r.date)));
    }

    #[test]
    fn test_weekend_eligible_employee_uses_full_interval() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 7));
        params.num_employees = 1;
        params.num_registrations_per_employee = 10;
        let mut pattern = weekday_pattern(0);
        pattern.can_work_weekends = true;
        let registrations = generate_registrations(&params, &[pattern], &mut rng);

        // All 7 days, including the weekend, are eligible.
        assert_eq!(registrations.len(), 7);
        assert!(registrations.iter().any(|r| is_weekend(r.date)));
    }

    #[test]
    fn test_employee_date_pairs_are_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = DatasetParams::sample(date(2024, 1, 1), date(2024, 3, 31));
        let patterns: Vec<_> = (0..5).map(weekday_pattern).collect();
        let registrations = generate_registrations(&params, &patterns, &mut rng);

        let pairs: HashSet<_> = registrations
            .iter()
            .map(|r| (r.employee_id.clone(), r.date))
            .collect();
        assert_eq!(pairs.len(), registrations.len());
    }

    #[test]
    fn test_work_duration_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = DatasetParams::sample(date(2024, 1, 1), date(2024, 2, 29));
        let patterns: Vec<_> = (0..4).map(weekday_pattern).collect();
        for reg in generate_registrations(&params, &patterns, &mut rng) {
            assert_eq!(
                reg.work_duration,
                reg.end_time - reg.start_time - reg.break_duration
            );
            assert!(reg.end_time > reg.start_time);
            assert!(reg.anomaly.is_none());
        }
    }

    #[test]
    fn test_end_time_fallback_guarantees_usable_shift() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 31));
        params.num_employees = 1;
        let mut pattern = weekday_pattern(0);
        // Every drawable end time is at or before every start time.
        pattern.allowed_start_times = vec![Decimal::from(9)];
        pattern.allowed_end_times = vec![Decimal::from(8), Decimal::from(9)];
        let registrations = generate_registrations(&params, &[pattern], &mut rng);

        assert!(!registrations.is_empty());
        for reg in &registrations {
            assert_eq!(reg.start_time, Decimal::from(9));
            assert_eq!(reg.end_time, Decimal::from(17));
        }
    }

    #[test]
    fn test_round_robin_projects_when_randomization_disabled() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 31));
        params.randomize_assignments = false;
        params.num_employees = 6;
        let patterns: Vec<_> = (0..6).map(weekday_pattern).collect();
        let registrations = generate_registrations(&params, &patterns, &mut rng);

        for reg in &registrations {
            let index: usize = reg
                .employee_id
                .strip_prefix("employee-")
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(reg.project_id, params.projects[index % params.projects.len()]);
        }
    }

    #[test]
    fn test_registration_ids_follow_creation_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 31));
        let patterns: Vec<_> = (0..3).map(weekday_pattern).collect();
        let registrations = generate_registrations(&params, &patterns, &mut rng);
        for (i, reg) in registrations.iter().enumerate() {
            assert_eq!(reg.registration_id, format!("reg-{i}"));
        }
    }

    #[test]
    fn test_values_come_from_the_pattern() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 2, 29));
        params.num_employees = 1;
        let pattern = weekday_pattern(0);
        let registrations = generate_registrations(&params, std::slice::from_ref(&pattern), &mut rng);

        for reg in &registrations {
            assert!(pattern.allowed_start_times.contains(&reg.start_time));
            assert!(pattern.allowed_break_durations.contains(&reg.break_duration));
            assert!(pattern.allowed_work_categories.contains(&reg.work_category));
            assert_eq!(reg.department_id, pattern.department_id);
        }
    }

    #[test]
    fn test_undrawable_pattern_is_skipped_not_fatal() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 1, 31));
        params.num_employees = 2;
        let mut broken = weekday_pattern(0);
        broken.allowed_work_categories.clear();
        let patterns = vec![broken, weekday_pattern(1)];
        let registrations = generate_registrations(&params, &patterns, &mut rng);

        assert!(!registrations.is_empty());
        assert!(registrations.iter().all(|r| r.employee_id == "employee-1"));
    }

    #[test]
    fn test_public_holiday_rate_is_roughly_ten_percent() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut params = DatasetParams::sample(date(2024, 1, 1), date(2024, 12, 31));
        params.num_employees = 10;
        params.num_registrations_per_employee = 200;
        let patterns: Vec<_> = (0..10).map(weekday_pattern).collect();
        let registrations = generate_registrations(&params, &patterns, &mut rng);

        assert!(registrations.len() >= 1000);
        let holidays = registrations.iter().filter(|r| r.public_holiday).count();
        let rate = holidays as f64 / registrations.len() as f64;
        assert!((0.05..0.15).contains(&rate), "holiday rate {rate} out of tolerance");
    }
}
