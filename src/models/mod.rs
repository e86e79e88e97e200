//! Domain models for the dataset engine.
//!
//! This module defines the core data types: time registrations, employee work
//! patterns, and the generation parameter set consumed by the pipeline.

mod params;
mod pattern;
mod registration;

pub use params::{AnomalyConfig, AnomalyType, DatasetParams, GeneratedDataset};
pub use pattern::{EmployeeWorkPattern, WorkPatternConfig};
pub use registration::{AnomalyInfo, AnomalySeverity, Numerical, TimeRegistration};
