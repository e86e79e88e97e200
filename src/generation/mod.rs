//! The generation pipeline for synthetic time-registration datasets.
//!
//! The pipeline runs in dependency order: the date range builder enumerates
//! the calendar interval, the work pattern generator derives or reuses one
//! pattern per employee under the global weekend quota, the registration
//! generator draws individual registrations from those patterns, and the
//! anomaly injector mutates a controlled fraction of the batch. The whole
//! computation is a pure, single-threaded batch: all randomness flows through
//! an injectable `rand::Rng`, so seeded runs are fully reproducible.

mod anomalies;
mod date_range;
mod pipeline;
mod registrations;
mod sample_data;
mod time_grid;
mod work_patterns;

pub use anomalies::{SENTINEL_PROJECT_ID, inject_anomalies};
pub use date_range::{build_date_range, is_weekend};
pub use pipeline::generate_dataset;
pub use registrations::{PUBLIC_HOLIDAY_PROBABILITY, generate_registrations};
pub use sample_data::generate_sample_data;
pub use time_grid::{sample_distinct, time_increments};
pub use work_patterns::{WEEKEND_WORKER_PROBABILITY, generate_patterns};
