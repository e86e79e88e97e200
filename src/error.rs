//! Error types for the dataset engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The generation pipeline itself degrades gracefully (empty ranges, clamped
//! cardinalities, exhausted date pools are not errors); these types cover
//! configuration loading and request validation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the dataset engine.
///
/// # Example
///
/// ```
/// use timesynth::error::EngineError;
///
/// let error = EngineError::DefaultsNotFound {
///     path: "/missing/defaults.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Defaults file not found: /missing/defaults.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Defaults file was not found at the specified path.
    #[error("Defaults file not found: {path}")]
    DefaultsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Defaults file could not be parsed.
    #[error("Failed to parse defaults file '{path}': {message}")]
    DefaultsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested generation interval is inverted.
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A generation parameter was invalid or inconsistent.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
