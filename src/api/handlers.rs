//! HTTP request handlers for the eligibility API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::eligibility::{
    DEFAULT_EXPIRATION_WINDOW_DAYS, LeaveCheck, ProposedLeave, check_leave_request,
    explain_operational_status, leave_overlap_audit_step, prepare_restriction, summarize_roster,
    upcoming_expirations,
};
use crate::error::EngineError;
use crate::models::{Leave, Restriction};

use super::request::{
    CheckLeaveRequest, EvaluateRestrictionRequest, RosterSummaryRequest, StatusRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CatalogResponse, HealthResponse, LeaveClearanceResponse,
    LeaveConflictResponse, RosterSummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/catalog", get(catalog_handler))
        .route("/restrictions/evaluate", post(evaluate_restriction_handler))
        .route("/leaves/check", post(check_leave_handler))
        .route("/status", post(status_handler))
        .route("/roster/summary", post(roster_summary_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /catalog.
async fn catalog_handler(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();
    json_response(
        StatusCode::OK,
        CatalogResponse {
            restriction_codes: catalog.restriction_codes(),
            critical_codes: catalog.critical_codes(),
            implication: catalog.implication(),
            leave_types: catalog.leave_types(),
        },
    )
}

/// Handler for POST /restrictions/evaluate.
///
/// Canonicalizes the codes of a restriction draft and returns the record as
/// it should be persisted, with its warnings and audit step.
async fn evaluate_restriction_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRestrictionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing restriction evaluation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match prepare_restriction(request.into(), state.catalog()) {
        Ok(prepared) => {
            info!(
                correlation_id = %correlation_id,
                person_id = prepared.person_id,
                codes = %prepared.codes.join(","),
                has_critical = prepared.has_critical,
                warnings = prepared.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Restriction evaluated"
            );
            json_response(StatusCode::OK, prepared)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /leaves/check.
///
/// Answers 200 when the leave may be persisted and 409 with the conflicting
/// record when it overlaps an existing leave of the same person.
async fn check_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let draft = request.draft();
    let proposed = ProposedLeave {
        person_id: draft.person_id,
        interval: draft.interval(),
        exclude_id: draft.id,
    };

    let start_time = Instant::now();
    match check_leave_request(&draft, &request.existing_leaves, state.catalog()) {
        Ok(LeaveCheck::Conflict(leave)) => {
            info!(
                correlation_id = %correlation_id,
                person_id = draft.person_id,
                conflicting_leave_id = leave.id,
                duration_us = start_time.elapsed().as_micros(),
                "Leave request conflicts with an existing leave"
            );
            let audit_step = leave_overlap_audit_step(&proposed, Some(leave), 1);
            json_response(
                StatusCode::CONFLICT,
                LeaveConflictResponse::new(leave.clone(), audit_step),
            )
        }
        Ok(LeaveCheck::Clear { warnings }) => {
            info!(
                correlation_id = %correlation_id,
                person_id = draft.person_id,
                leave_type = %draft.leave_type,
                warnings = warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Leave request cleared"
            );
            json_response(
                StatusCode::OK,
                LeaveClearanceResponse {
                    person_id: draft.person_id,
                    warnings,
                    audit_step: leave_overlap_audit_step(&proposed, None, 1),
                },
            )
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /status.
async fn status_handler(payload: Result<Json<StatusRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing status resolution");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let reference_date = request.reference_date.unwrap_or_else(local_today);
    let resolution =
        explain_operational_status(reference_date, &request.restrictions, &request.leaves, 1);

    info!(
        correlation_id = %correlation_id,
        reference_date = %reference_date,
        status = %resolution.status,
        duration_us = start_time.elapsed().as_micros(),
        "Status resolved"
    );
    json_response(StatusCode::OK, resolution)
}

/// Handler for POST /roster/summary.
async fn roster_summary_handler(
    payload: Result<Json<RosterSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster summary");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let reference_date = request.reference_date.unwrap_or_else(local_today);
    let window_days = request.window_days.unwrap_or(DEFAULT_EXPIRATION_WINDOW_DAYS);

    let summary = summarize_roster(reference_date, &request.personnel);

    let restrictions: Vec<Restriction> = request
        .personnel
        .iter()
        .flat_map(|p| p.restrictions.iter().cloned())
        .collect();
    let leaves: Vec<Leave> = request
        .personnel
        .iter()
        .flat_map(|p| p.leaves.iter().cloned())
        .collect();
    let expirations = upcoming_expirations(reference_date, window_days, &restrictions, &leaves);

    info!(
        correlation_id = %correlation_id,
        reference_date = %reference_date,
        total = summary.total,
        critical_alerts = summary.critical_restrictions.len(),
        expirations = expirations.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Roster summarized"
    );
    json_response(
        StatusCode::OK,
        RosterSummaryResponse {
            summary,
            window_days,
            expirations,
        },
    )
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected by eligibility rules"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure.
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
    json_response(StatusCode::BAD_REQUEST, error)
}
