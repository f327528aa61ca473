//! HTTP API module for the eligibility engine.
//!
//! This module exposes the eligibility rules as JSON endpoints: restriction
//! evaluation, leave checks, status resolution and the roster summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckLeaveRequest, EvaluateRestrictionRequest, RosterSummaryRequest, StatusRequest};
pub use response::{
    ApiError, ApiErrorResponse, CatalogResponse, HealthResponse, LeaveClearanceResponse,
    LeaveConflictResponse, RosterSummaryResponse,
};
pub use state::AppState;
