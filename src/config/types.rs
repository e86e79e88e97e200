//! Defaults profile types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AnomalyConfig, WorkPatternConfig};

/// The default generation parameters served to form clients.
///
/// These are starting values, not constraints: a generation request may
/// override any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationDefaults {
    /// Default number of synthetic employees.
    pub num_employees: usize,
    /// Default project labels.
    pub projects: Vec<String>,
    /// Default work category labels.
    pub work_categories: Vec<String>,
    /// Default department labels.
    pub departments: Vec<String>,
    /// Default registrations per employee.
    pub num_registrations_per_employee: usize,
    /// Default shift start-time range.
    pub work_start_range: [Decimal; 2],
    /// Default shift end-time range.
    pub work_end_range: [Decimal; 2],
    /// Default break-duration range.
    pub break_duration_range: [Decimal; 2],
    /// Whether weekends are skipped by default.
    pub skip_weekends: bool,
    /// Whether project assignment is randomized by default.
    pub randomize_assignments: bool,
    /// Default anomaly injection settings.
    pub anomaly_config: AnomalyConfig,
    /// Default work pattern cardinalities and weekend quota.
    pub work_pattern_config: WorkPatternConfig,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            num_employees: 5,
            projects: ["A", "B", "C", "D"].map(String::from).to_vec(),
            work_categories: ["Development", "Testing", "Meetings", "Documentation"]
                .map(String::from)
                .to_vec(),
            departments: ["HR", "IT", "Sales", "Marketing"].map(String::from).to_vec(),
            num_registrations_per_employee: 35,
            work_start_range: [Decimal::from(7), Decimal::from(9)],
            work_end_range: [Decimal::from(16), Decimal::from(18)],
            break_duration_range: [Decimal::new(5, 1), Decimal::from(2)],
            skip_weekends: true,
            randomize_assignments: true,
            anomaly_config: AnomalyConfig {
                anomaly_type: crate::models::AnomalyType::None,
                probability: 0.33,
            },
            work_pattern_config: WorkPatternConfig {
                num_departments: 1,
                num_start_times: 1,
                num_end_times: 1,
                num_break_durations: 1,
                num_work_categories: 1,
                min_weekend_workers: 1,
            },
        }
    }
}
