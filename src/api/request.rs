//! Request types for the dataset engine API.
//!
//! This module defines the JSON request structures for the `/generate` and
//! `/export` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DatasetParams, TimeRegistration};

/// Request body for the `/generate` endpoint.
///
/// The generation parameters are flattened into the body, so clients post the
/// same shape the form layer produces, optionally extended with a seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The full generation parameter set.
    #[serde(flatten)]
    pub params: DatasetParams,
    /// Optional seed for a reproducible run. When omitted a fresh seed is
    /// drawn and echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Request body for the `/export` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The registrations to export.
    pub registrations: Vec<TimeRegistration>,
    /// Optional inclusive lower bound on exported dates.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional inclusive upper bound on exported dates.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
