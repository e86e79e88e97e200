//! HTTP API module for the dataset engine.
//!
//! This module provides the REST endpoints for generating synthetic
//! time-registration datasets and exporting them in the downstream
//! tab-separated format.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportRequest, GenerateRequest};
pub use response::{ApiError, GenerateResponse};
pub use state::AppState;
