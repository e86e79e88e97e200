//! Employee work pattern model.
//!
//! A work pattern is the per-employee "contract" constraining which values
//! that employee's registrations may draw from. Patterns are created once per
//! employee per dataset lineage and reused verbatim on subsequent generation
//! calls via the caller-supplied pattern cache.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed set of plausible attribute values for one employee.
///
/// All allowed-sets are non-empty, duplicate-free and ascending; the pattern
/// generator clamps requested cardinalities so these invariants hold even for
/// degenerate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWorkPattern {
    /// Stable identifier of the employee the pattern belongs to.
    pub employee_id: String,
    /// The single department assigned to this employee.
    pub department_id: String,
    /// Shift start times (fractional hours) this employee may use.
    pub allowed_start_times: Vec<Decimal>,
    /// Shift end times (fractional hours) this employee may use.
    pub allowed_end_times: Vec<Decimal>,
    /// Break durations (hours) this employee may take.
    pub allowed_break_durations: Vec<Decimal>,
    /// Work categories this employee may book on.
    pub allowed_work_categories: Vec<String>,
    /// Whether this employee may be scheduled on Saturdays and Sundays.
    ///
    /// Decided once at pattern-creation time under the global weekend quota.
    pub can_work_weekends: bool,
}

impl EmployeeWorkPattern {
    /// Returns true when every allowed-set required for registration
    /// synthesis contains at least one value.
    pub fn is_drawable(&self) -> bool {
        !self.allowed_start_times.is_empty()
            && !self.allowed_end_times.is_empty()
            && !self.allowed_break_durations.is_empty()
            && !self.allowed_work_categories.is_empty()
    }
}

/// Per-field cardinality configuration for work pattern generation.
///
/// Each `num_*` field requests how many distinct values the corresponding
/// allowed-set should contain; values are clamped to the actual grid or label
/// list size, with a minimum of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPatternConfig {
    /// How many of the configured departments are assignable.
    pub num_departments: usize,
    /// Requested cardinality of each employee's start-time set.
    pub num_start_times: usize,
    /// Requested cardinality of each employee's end-time set.
    pub num_end_times: usize,
    /// Requested cardinality of each employee's break-duration set.
    pub num_break_durations: usize,
    /// Requested cardinality of each employee's category set.
    pub num_work_categories: usize,
    /// Minimum number of weekend-eligible employees across the whole batch.
    pub min_weekend_workers: usize,
}
