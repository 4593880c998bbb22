//! HTTP request handlers for the Wage Projection API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_report, calculate_wage_impact};
use crate::insights::{InsightRequest, get_insights};
use crate::models::{InputRanges, MAX_PROJECTION_YEARS, ProjectionInputs};

use super::request::ProjectionRequest;
use super::response::{ApiError, ApiErrorResponse, InsightsResponse, SchedulesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/insights", post(insights_handler))
        .route("/schedules", get(schedules_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a request body into validated inputs, or the error to send back.
fn extract_inputs(
    correlation_id: Uuid,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<ProjectionInputs, ApiErrorResponse> {
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
                        ApiError::validation_error(body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let inputs: ProjectionInputs = request.into();
    inputs.validate().map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected projection inputs"
        );
        ApiErrorResponse::from(err)
    })?;

    Ok(inputs)
}

/// Handler for POST /calculate.
///
/// Returns the quarterly chart series and loss statistics.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let inputs = match extract_inputs(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let result = calculate_wage_impact(&inputs, state.config().config());
    info!(
        correlation_id = %correlation_id,
        start_wage = inputs.start_wage,
        weekly_hours = inputs.weekly_hours,
        projection_years = inputs.projection_years,
        chart_points = result.chart_data.len(),
        loss_30_year = result.stats.loss_30_year,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_ok(result)
}

/// Handler for POST /report.
///
/// Returns the milestone table, raise timeline and assumptions text.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let inputs = match extract_inputs(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let report = build_report(&inputs, state.config().config());
    info!(
        correlation_id = %correlation_id,
        raises = report.raise_timeline.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Report completed successfully"
    );

    json_ok(report)
}

/// Handler for POST /insights.
///
/// Always answers 200 once the inputs are valid; a failing text service only
/// changes the commentary to the fallback message.
async fn insights_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing insights request");

    let inputs = match extract_inputs(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(err) => return err.into_response(),
    };

    let result = calculate_wage_impact(&inputs, state.config().config());
    let request = InsightRequest::from_projection(&inputs, &result.stats);

    let start_time = Instant::now();
    let insights = get_insights(state.insights(), &request).await;
    info!(
        correlation_id = %correlation_id,
        chars = insights.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Insights completed"
    );

    json_ok(InsightsResponse {
        insights,
        stats: result.stats,
    })
}

/// Handler for GET /schedules.
async fn schedules_handler(State(state): State<AppState>) -> Response {
    json_ok(SchedulesResponse {
        config: state.config().config().clone(),
        input_ranges: InputRanges::default(),
        max_projection_years: MAX_PROJECTION_YEARS,
    })
}
