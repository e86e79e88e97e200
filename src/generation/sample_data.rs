//! Quick unconstrained sample batches.
//!
//! Unlike the pattern-driven pipeline, this generator produces standalone
//! registrations with numerical metrics attached, which makes it handy for
//! exercising the anomaly injector's numerical mutations and for demo data.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use crate::models::{Numerical, TimeRegistration};

const SAMPLE_PROJECTS: [&str; 4] = ["A", "B", "C", "D"];
const SAMPLE_DEPARTMENTS: [&str; 4] = ["HR", "IT", "Sales", "Marketing"];

/// Generates `count` standalone sample registrations.
///
/// Shifts start between 06:00 and 17:00 and run 4 to 12 hours with a break of
/// up to two hours on the half-hour grid; dates fall anywhere in 2024. Every
/// registration carries `productivity` and `quality` metrics in `0..100`.
pub fn generate_sample_data(count: usize, rng: &mut impl Rng) -> Vec<TimeRegistration> {
    (0..count)
        .map(|index| {
            let start_hour = rng.gen_range(6..18u32);
            let shift_hours = rng.gen_range(4..=12u32);
            let start_time = Decimal::from(start_hour);
            let end_time = Decimal::from(start_hour + shift_hours);
            // 0 to 2 hours in half-hour steps.
            let break_duration = Decimal::new(5, 1) * Decimal::from(rng.gen_range(0..=4u32));

            let month = rng.gen_range(1..=12u32);
            let day = rng.gen_range(1..=28u32);

            TimeRegistration {
                registration_id: format!("reg-{index}"),
                // Days are capped at 28, so the draw is always a valid date.
                date: NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default(),
                employee_id: format!("employee-{}", rng.gen_range(0..5u32)),
                project_id: SAMPLE_PROJECTS
                    .choose(rng)
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
                department_id: SAMPLE_DEPARTMENTS
                    .choose(rng)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                work_category: rng.gen_range(0..200u32).to_string(),
                start_time,
                end_time,
                break_duration,
                work_duration: end_time - start_time - break_duration,
                public_holiday: rng.gen_bool(0.1),
                numericals: vec![
                    Numerical {
                        name: "productivity".to_string(),
                        value: Decimal::from(rng.gen_range(0..100u32)),
                    },
                    Numerical {
                        name: "quality".to_string(),
                        value: Decimal::from(rng.gen_range(0..100u32)),
                    },
                ],
                anomaly: None,
            }
        })
        .collect()
}
