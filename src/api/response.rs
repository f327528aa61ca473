//! Response types for the eligibility API.
//!
//! This module defines the response bodies of the endpoints, the error body
//! and the mapping from engine errors to HTTP statuses.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::{ImplicationRule, LeaveType, RestrictionCode};
use crate::eligibility::{Expiration, RosterSummary};
use crate::error::EngineError;
use crate::models::{AuditStep, Leave, PersonId};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidCatalog { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidCodes { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RESTRICTION_CODES",
                    message,
                    "Every listed code is absent from the restriction catalog",
                ),
            },
            EngineError::EmptyCodeSet => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_CODE_SET",
                    message,
                    "A restriction needs at least one code",
                ),
            },
            EngineError::InvalidRestriction { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RESTRICTION", message),
            },
            EngineError::InvalidLeave { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_LEAVE", message),
            },
            EngineError::LeaveTypeNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LEAVE_TYPE_NOT_FOUND",
                    message,
                    format!("The leave type '{}' is not in the leave-type catalog", code),
                ),
            },
        }
    }
}

/// Body of a `409 Conflict` answer to `POST /leaves/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveConflictResponse {
    /// Always `LEAVE_CONFLICT`.
    pub code: String,
    /// Human-readable description of the conflict.
    pub message: String,
    /// The existing leave the request overlaps.
    pub conflicting_leave: Leave,
    /// The audit step recording the overlap check.
    pub audit_step: AuditStep,
}

impl LeaveConflictResponse {
    /// Describes a conflict with `leave`.
    pub fn new(leave: Leave, audit_step: AuditStep) -> Self {
        let message = match leave.interval().effective_end() {
            Some(end) => format!(
                "Leave overlaps existing {} leave from {} to {}",
                leave.leave_type, leave.start_date, end
            ),
            None => format!(
                "Leave overlaps existing open-ended {} leave from {}",
                leave.leave_type, leave.start_date
            ),
        };
        Self {
            code: "LEAVE_CONFLICT".to_string(),
            message,
            conflicting_leave: leave,
            audit_step,
        }
    }
}

/// Body of a `200 OK` answer to `POST /leaves/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveClearanceResponse {
    /// The person requesting the leave.
    pub person_id: PersonId,
    /// Warnings for the requester.
    pub warnings: Vec<String>,
    /// The audit step recording the overlap check.
    pub audit_step: AuditStep,
}

/// Body of `POST /roster/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummaryResponse {
    /// Status counts and critical alerts.
    #[serde(flatten)]
    pub summary: RosterSummary,
    /// The look-ahead window used for expirations.
    pub window_days: u32,
    /// Records ending within the window.
    pub expirations: Vec<Expiration>,
}

/// Body of `GET /catalog`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    /// Every restriction code.
    pub restriction_codes: &'a BTreeMap<String, RestrictionCode>,
    /// The codes flagged critical.
    pub critical_codes: Vec<&'a str>,
    /// The mandatory implication rule.
    pub implication: &'a ImplicationRule,
    /// Every leave type.
    pub leave_types: &'a BTreeMap<String, LeaveType>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: String,
    /// The engine version.
    pub version: String,
}
