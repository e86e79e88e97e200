//! Synthetic Time-Registration Dataset Engine
//!
//! This crate generates realistic-looking employee time-tracking records for
//! benchmarking anomaly-detection tooling. Each synthetic employee receives a
//! work pattern (a fixed set of plausible start/end times, break durations and
//! work categories), registrations are drawn from that pattern over a calendar
//! range, and a post-processing injector mutates a controlled fraction of the
//! batch into labelled weak or strong anomalies.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod models;
