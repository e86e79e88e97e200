//! HTTP request handlers for the dataset engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::export::to_tsv_filtered;
use crate::generation::generate_dataset;
use crate::models::DatasetParams;

use super::request::{ExportRequest, GenerateRequest};
use super::response::{ApiError, ApiErrorResponse, GenerateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/export", post(export_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto the API error shape.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Interactive validation performed before the core pipeline runs.
///
/// The core itself degrades gracefully on these inputs; the API signals them
/// up front so form clients get actionable messages.
fn validate_params(params: &DatasetParams) -> EngineResult<()> {
    if params.end_date < params.start_date {
        return Err(EngineError::InvalidDateRange {
            start: params.start_date,
            end: params.end_date,
        });
    }
    for (field, labels) in [
        ("projects", &params.projects),
        ("work_categories", &params.work_categories),
        ("departments", &params.departments),
    ] {
        if labels.is_empty() {
            return Err(EngineError::InvalidParameter {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }
    if !(0.0..=1.0).contains(&params.anomaly_config.probability) {
        return Err(EngineError::InvalidParameter {
            field: "anomaly_config.probability".to_string(),
            message: "must lie in [0, 1]".to_string(),
        });
    }
    Ok(())
}

/// Handler for the POST /generate endpoint.
///
/// Validates the request, seeds the generator (from the request seed when
/// given, otherwise from entropy) and runs the full pipeline. The seed in use
/// is echoed back so any run can be reproduced.
async fn generate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing generation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_params(&request.params) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Generation request rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let start_time = Instant::now();
    let dataset = generate_dataset(&request.params, &mut rng);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        seed,
        employees = dataset.patterns.len(),
        registrations = dataset.registrations.len(),
        duration_us = duration.as_micros(),
        "Generation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(GenerateResponse {
            seed,
            registrations: dataset.registrations,
            patterns: dataset.patterns,
        }),
    )
        .into_response()
}

/// Handler for the POST /export endpoint.
///
/// Renders the posted registrations as tab-separated rows, optionally
/// restricted to an inclusive date window.
async fn export_handler(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let body = to_tsv_filtered(&request.registrations, request.start_date, request.end_date);
    info!(
        correlation_id = %correlation_id,
        registrations = request.registrations.len(),
        rows = body.lines().count(),
        "Export completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/tab-separated-values")],
        body,
    )
        .into_response()
}

/// Handler for the GET /defaults endpoint.
///
/// Serves the generation defaults profile for form clients.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.defaults().defaults().clone()),
    )
        .into_response()
}
