//! Generation parameters and pipeline output types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeWorkPattern, TimeRegistration, WorkPatternConfig};

/// Which anomaly severities the injector may apply.
///
/// `Both` is an explicit 50/50 dispatch between the weak and strong cases,
/// not an independent third mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyType {
    /// Leave the batch untouched.
    #[default]
    None,
    /// Inject only weak anomalies.
    Weak,
    /// Inject only strong anomalies.
    Strong,
    /// Choose weak or strong with equal odds per injected anomaly.
    Both,
}

/// Configuration for the anomaly injection pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AnomalyConfig {
    /// The anomaly severities the injector may apply.
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    /// Per-registration probability of injection, clamped into `[0, 1]`.
    #[serde(default)]
    pub probability: f64,
}

/// The full parameter set for one generation call.
///
/// This mirrors the input consumed from the external form/config layer; the
/// pipeline treats it as read-only. `existing_patterns` is the consistency
/// cache: a pattern supplied for an employee id is reused verbatim instead of
/// being regenerated, preserving behaviour across calls for the same
/// synthetic employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetParams {
    /// Number of synthetic employees, indexed `0..n`.
    pub num_employees: usize,
    /// First day of the generation interval (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the generation interval (inclusive).
    pub end_date: NaiveDate,
    /// Ordered project labels.
    pub projects: Vec<String>,
    /// Ordered work category labels.
    pub work_categories: Vec<String>,
    /// Ordered department labels.
    pub departments: Vec<String>,
    /// Registrations requested per employee (may degrade when the eligible
    /// date pool is smaller).
    pub num_registrations_per_employee: usize,
    /// `[min, max]` bounds of the shift start-time grid.
    pub work_start_range: [Decimal; 2],
    /// `[min, max]` bounds of the shift end-time grid.
    pub work_end_range: [Decimal; 2],
    /// `[min, max]` bounds of the break-duration grid.
    pub break_duration_range: [Decimal; 2],
    /// Exclude Saturdays and Sundays for weekend-ineligible employees.
    pub skip_weekends: bool,
    /// Assign projects uniformly at random instead of round-robin.
    pub randomize_assignments: bool,
    /// Anomaly injection settings.
    pub anomaly_config: AnomalyConfig,
    /// Cardinality and quota settings for work pattern generation.
    pub work_pattern_config: WorkPatternConfig,
    /// Previously generated patterns keyed by employee id, reused verbatim.
    #[serde(default)]
    pub existing_patterns: BTreeMap<String, EmployeeWorkPattern>,
}

/// The output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDataset {
    /// All synthesized registrations, in creation order.
    pub registrations: Vec<TimeRegistration>,
    /// One pattern per employee, in ascending employee-index order. Reused
    /// cache entries are included, so this is the merged per-employee view.
    pub patterns: Vec<EmployeeWorkPattern>,
}

impl DatasetParams {
    /// Convenience constructor used by tests and benchmarks: a small,
    /// fully-populated parameter set over the given interval.
    pub fn sample(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            num_employees: 5,
            start_date,
            end_date,
            projects: vec!["A", "B", "C", "D"].into_iter().map(String::from).collect(),
            work_categories: vec!["Development", "Testing", "Meetings", "Documentation"]
                .into_iter()
                .map(String::from)
                .collect(),
            departments: vec!["HR", "IT", "Sales", "Marketing"]
                .into_iter()
                .map(String::from)
                .collect(),
            num_registrations_per_employee: 10,
            work_start_range: [Decimal::from(7), Decimal::from(9)],
            work_end_range: [Decimal::from(16), Decimal::from(18)],
            break_duration_range: [Decimal::new(5, 1), Decimal::from(2)],
            skip_weekends: true,
            randomize_assignments: true,
            anomaly_config: AnomalyConfig::default(),
            work_pattern_config: WorkPatternConfig {
                num_departments: 2,
                num_start_times: 3,
                num_end_times: 3,
                num_break_durations: 2,
                num_work_categories: 2,
                min_weekend_workers: 1,
            },
            existing_patterns: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AnomalyType::Both).unwrap(), "\"both\"");
        assert_eq!(serde_json::to_string(&AnomalyType::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_anomaly_config_accepts_type_key() {
        let config: AnomalyConfig =
            serde_json::from_str(r#"{"type": "weak", "probability": 0.33}"#).unwrap();
        assert_eq!(config.anomaly_type, AnomalyType::Weak);
        assert!((config.probability - 0.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_anomaly_type_defaults_to_none() {
        assert_eq!(AnomalyType::default(), AnomalyType::None);
    }

    #[test]
    fn test_params_deserialize_without_existing_patterns() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let mut value = serde_json::to_value(DatasetParams::sample(start, end)).unwrap();
        value.as_object_mut().unwrap().remove("existing_patterns");
        let params: DatasetParams = serde_json::from_value(value).unwrap();
        assert!(params.existing_patterns.is_empty());
    }
}
