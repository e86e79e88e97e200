//! Work pattern generation under the global weekend quota.
//!
//! Employees are processed in strictly ascending index order. The quota
//! bookkeeping ("how many weekend workers are still required" versus "how
//! many employees remain") is computed relative to that order, so the order
//! is part of the algorithm's contract: pattern assignment must complete as a
//! sequential pre-pass before any registration synthesis.

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DatasetParams, EmployeeWorkPattern};

use super::time_grid::{sample_distinct, time_increments};

/// Probability that an employee is weekend-eligible while the quota is still
/// unmet but not yet forcing.
pub const WEEKEND_WORKER_PROBABILITY: f64 = 0.2;

/// The regular grid increment for start/end/break values, in hours.
fn half_hour() -> Decimal {
    Decimal::new(5, 1)
}

/// Derives or reuses one work pattern per employee.
///
/// For each employee index in `0..num_employees`, a pattern supplied in
/// `params.existing_patterns` is reused verbatim (patterns are immutable once
/// created); otherwise a fresh pattern is sampled from half-hour grids over
/// the configured ranges, with every cardinality clamped so all allowed-sets
/// are non-empty.
///
/// Weekend eligibility honours the `min_weekend_workers` quota: eligibility
/// is forced whenever the outstanding requirement can only be met by all
/// remaining employees, drawn with a small fixed probability while the quota
/// is unmet, and denied once the quota is satisfied. Reused cache entries
/// count toward the tally. At least `min(min_weekend_workers, num_employees)`
/// returned patterns are weekend-eligible by construction.
pub fn generate_patterns(params: &DatasetParams, rng: &mut impl Rng) -> Vec<EmployeeWorkPattern> {
    let config = &params.work_pattern_config;

    let start_grid = time_increments(
        params.work_start_range[0],
        params.work_start_range[1],
        half_hour(),
    );
    let end_grid = time_increments(
        params.work_end_range[0],
        params.work_end_range[1],
        half_hour(),
    );
    let break_grid = time_increments(
        params.break_duration_range[0],
        params.break_duration_range[1],
        half_hour(),
    );

    let department_count = config
        .num_departments
        .max(1)
        .min(params.departments.len());
    let department_pool = &params.departments[..department_count];

    let mut patterns = Vec::with_capacity(params.num_employees);
    let mut weekend_count = 0usize;

    for index in 0..params.num_employees {
        let employee_id = format!("employee-{index}");

        if let Some(existing) = params.existing_patterns.get(&employee_id) {
            if existing.can_work_weekends {
                weekend_count += 1;
            }
            patterns.push(existing.clone());
            continue;
        }

        let department_id = department_pool.choose(rng).cloned().unwrap_or_default();
        let allowed_start_times = sample_distinct(&start_grid, config.num_start_times, rng);
        let allowed_end_times = sample_distinct(&end_grid, config.num_end_times, rng);
        let allowed_break_durations =
            sample_distinct(&break_grid, config.num_break_durations, rng);
        let allowed_work_categories =
            sample_distinct(&params.work_categories, config.num_work_categories, rng);

        let remaining_required = config.min_weekend_workers.saturating_sub(weekend_count);
        let remaining_employees = params.num_employees - index;
        let can_work_weekends = if remaining_required > 0 && remaining_required >= remaining_employees {
            // The quota can only still be met by forcing the tail.
            true
        } else if remaining_required > 0 {
            rng.gen_bool(WEEKEND_WORKER_PROBABILITY)
        } else {
            false
        };
        if can_work_weekends {
            weekend_count += 1;
        }

        patterns.push(EmployeeWorkPattern {
            employee_id,
            department_id,
            allowed_start_times,
            allowed_end_times,
            allowed_break_durations,
            allowed_work_categories,
            can_work_weekends,
        });
    }

    debug!(
        employees = patterns.len(),
        weekend_workers = weekend_count,
        "generated work patterns"
    );
    patterns
}
