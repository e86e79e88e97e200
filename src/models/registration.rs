//! Time registration model and related types.
//!
//! This module defines the [`TimeRegistration`] struct, one synthesized
//! time-tracking event, together with the anomaly tag attached to mutated
//! registrations and the optional numerical business metrics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named numeric business metric attached to a registration.
///
/// Numericals are out of the core's scheduling focus but serve as mutation
/// targets for the anomaly injector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numerical {
    /// The metric name (e.g. "productivity").
    pub name: String,
    /// The metric value.
    pub value: Decimal,
}

/// Severity of an injected anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    /// A small deliberate deviation (e.g. a one-hour shift).
    Weak,
    /// A large deliberate deviation (e.g. a three-hour shift or a weekend move).
    Strong,
}

impl std::fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalySeverity::Weak => write!(f, "weak"),
            AnomalySeverity::Strong => write!(f, "strong"),
        }
    }
}

/// Describes the anomaly injected into a registration.
///
/// Modelled as a single value carried in an `Option` so that "anomaly present
/// implies mutated field present" is enforced by the type rather than by two
/// independently nullable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyInfo {
    /// How severe the injected deviation is.
    pub severity: AnomalySeverity,
    /// Human-readable label of the mutated attribute (e.g. "Start Time").
    pub field: String,
}

/// One synthesized time-tracking event for one employee on one day.
///
/// Times are fractional hours of day on a half-hour grid; `work_duration` is
/// derived as `end_time - start_time - break_duration` and is deliberately not
/// clamped to zero (a break longer than the shift passes through as a negative
/// duration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRegistration {
    /// Unique identifier within a single generation call, in creation order.
    pub registration_id: String,
    /// The calendar day of the registration.
    pub date: NaiveDate,
    /// The employee this registration belongs to.
    pub employee_id: String,
    /// The project the hours are booked on.
    pub project_id: String,
    /// The employee's department, copied from the work pattern.
    pub department_id: String,
    /// The work category, a member of the pattern's allowed categories.
    pub work_category: String,
    /// Shift start as a fractional hour of day.
    pub start_time: Decimal,
    /// Shift end as a fractional hour of day, normalized to exceed the start.
    pub end_time: Decimal,
    /// Unpaid break length in hours.
    pub break_duration: Decimal,
    /// Derived working hours: `end_time - start_time - break_duration`.
    pub work_duration: Decimal,
    /// Whether the day was flagged as a public holiday (~10% chance).
    pub public_holiday: bool,
    /// Optional named numeric business metrics.
    #[serde(default)]
    pub numericals: Vec<Numerical>,
    /// The anomaly tag, present only on mutated registrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<AnomalyInfo>,
}

impl TimeRegistration {
    /// Recomputes `work_duration` from the current start, end and break values.
    ///
    /// Called after any mutation of the underlying time fields. The result is
    /// not clamped; see the module docs.
    pub fn recompute_work_duration(&mut self) {
        self.work_duration = self.end_time - self.start_time - self.break_duration;
    }

    /// Returns the numeric severity code used by downstream consumers.
    ///
    /// `0` for no anomaly, `1` for weak, `2` for strong.
    ///
    /// # Example
    ///
    /// ```
    /// use timesynth::models::{AnomalyInfo, AnomalySeverity};
    ///
    /// let info = AnomalyInfo {
    ///     severity: AnomalySeverity::Strong,
    ///     field: "Time Shift".to_string(),
    /// };
    /// assert_eq!(info.severity, AnomalySeverity::Strong);
    /// ```
    pub fn severity_code(&self) -> u8 {
        match &self.anomaly {
            None => 0,
            Some(info) => match info.severity {
                AnomalySeverity::Weak => 1,
                AnomalySeverity::Strong => 2,
            },
        }
    }

    /// Returns true when this registration carries an anomaly tag.
    pub fn is_anomalous(&self) -> bool {
        self.anomaly.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registration() -> TimeRegistration {
        TimeRegistration {
            registration_id: "reg-0".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            employee_id: "employee-0".to_string(),
            project_id: "A".to_string(),
            department_id: "IT".to_string(),
            work_category: "Development".to_string(),
            start_time: Decimal::new(85, 1),     // 8.5
            end_time: Decimal::new(165, 1),      // 16.5
            break_duration: Decimal::new(5, 1),  // 0.5
            work_duration: Decimal::new(75, 1),  // 7.5
            public_holiday: false,
            numericals: vec![],
            anomaly: None,
        }
    }

    #[test]
    fn test_recompute_work_duration() {
        let mut reg = sample_registration();
        reg.end_time = Decimal::new(18, 0);
        reg.recompute_work_duration();
        assert_eq!(reg.work_duration, Decimal::new(9, 0));
    }

    #[test]
    fn test_recompute_allows_negative_duration() {
        let mut reg = sample_registration();
        reg.break_duration = Decimal::new(10, 0);
        reg.recompute_work_duration();
        assert_eq!(reg.work_duration, Decimal::new(-2, 0));
    }

    #[test]
    fn test_severity_codes() {
        let mut reg = sample_registration();
        assert_eq!(reg.severity_code(), 0);
        assert!(!reg.is_anomalous());

        reg.anomaly = Some(AnomalyInfo {
            severity: AnomalySeverity::Weak,
            field: "Break Duration".to_string(),
        });
        assert_eq!(reg.severity_code(), 1);

        reg.anomaly = Some(AnomalyInfo {
            severity: AnomalySeverity::Strong,
            field: "Time Shift".to_string(),
        });
        assert_eq!(reg.severity_code(), 2);
        assert!(reg.is_anomalous());
    }

    #[test]
    fn test_anomaly_absent_from_json_when_none() {
        let reg = sample_registration();
        let json = serde_json::to_value(&reg).unwrap();
        assert!(json.get("anomaly").is_none());
    }

    #[test]
    fn test_anomaly_round_trips_through_json() {
        let mut reg = sample_registration();
        reg.anomaly = Some(AnomalyInfo {
            severity: AnomalySeverity::Strong,
            field: "Date (Weekend)".to_string(),
        });
        let json = serde_json::to_string(&reg).unwrap();
        let back: TimeRegistration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reg);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(AnomalySeverity::Weak.to_string(), "weak");
        assert_eq!(AnomalySeverity::Strong.to_string(), "strong");
    }
}
