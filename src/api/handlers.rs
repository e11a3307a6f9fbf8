//! HTTP request handlers for the voucher engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::benefit::compute;
use crate::config::UnionTable;
use crate::models::RawTable;
use crate::unify::unify;

use super::request::ProcessRequest;
use super::response::{ApiErrorResponse, ProcessResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .with_state(state)
}

/// Handler for POST /process endpoint.
///
/// Runs one batch through the full pipeline: unify the supplied sources,
/// classify eligibility, compute adjusted benefit values, and return the
/// per-employee results with summary metrics.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing voucher batch request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        super::response::ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        super::response::ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    super::response::ApiError::malformed_json(format!(
                        "Invalid JSON syntax: {}",
                        err
                    ))
                }
                JsonRejection::MissingJsonContentType(_) => super::response::ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => super::response::ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Per-request override, otherwise the shared configured table.
    let unions: UnionTable = match request.union_adjustments {
        Some(adjustments) => UnionTable::new(adjustments),
        None => state.config().unions().clone(),
    };

    let sources: Vec<RawTable> = request.sources.into_iter().map(Into::into).collect();

    let records = match unify(&sources) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Unification failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let (results, summary) = compute(&records, &unions);

    info!(
        correlation_id = %correlation_id,
        sources_count = sources.len(),
        records_count = records.len(),
        eligible_count = summary.eligible_count,
        total_disbursed = %summary.total_disbursed,
        "Batch processed successfully"
    );

    let response = ProcessResponse {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        results,
        summary,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
