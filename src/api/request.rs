//! Request types for the eligibility API.
//!
//! This module defines the JSON request bodies of the POST endpoints and
//! their conversion into domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Leave, LeaveDraft, PersonId, PersonRecords, RecordId, Restriction, RestrictionDraft};

/// Request body for `POST /restrictions/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRestrictionRequest {
    /// The id of the record being edited, if any.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// The restricted person.
    pub person_id: PersonId,
    /// Restriction codes as entered, in any case and order.
    pub codes: Vec<String>,
    /// Free-text medical opinion.
    #[serde(default)]
    pub medical_opinion: String,
    /// First day of the restriction (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the restriction (inclusive).
    pub end_date: NaiveDate,
    /// Reference to the supporting document.
    #[serde(default)]
    pub document: String,
}

impl From<EvaluateRestrictionRequest> for RestrictionDraft {
    fn from(req: EvaluateRestrictionRequest) -> Self {
        RestrictionDraft {
            id: req.id,
            person_id: req.person_id,
            codes: req.codes,
            medical_opinion: req.medical_opinion,
            start_date: req.start_date,
            end_date: req.end_date,
            document: req.document,
        }
    }
}

/// Request body for `POST /leaves/check`.
///
/// `existing_leaves` are the person's current leave records; records of other
/// people and deleted records are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckLeaveRequest {
    /// The id of the leave being edited, if any.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// The person requesting the leave.
    pub person_id: PersonId,
    /// The leave type id from the leave-type catalog.
    pub leave_type: String,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// True when the leave has no fixed end date.
    #[serde(default)]
    pub indeterminate: bool,
    /// Reference to the supporting document.
    #[serde(default)]
    pub document: String,
    /// The person's existing leaves.
    #[serde(default)]
    pub existing_leaves: Vec<Leave>,
}

impl CheckLeaveRequest {
    /// Returns the leave draft described by this request.
    pub fn draft(&self) -> LeaveDraft {
        LeaveDraft {
            id: self.id,
            person_id: self.person_id,
            leave_type: self.leave_type.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            indeterminate: self.indeterminate,
            document: self.document.clone(),
        }
    }
}

/// Request body for `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The date to evaluate; defaults to the server's local date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The person's restrictions, in any state.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    /// The person's leaves, in any state.
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

/// Request body for `POST /roster/summary`.
///
/// Critical alerts are driven by each restriction's stored `has_critical`
/// flag, not by its codes. Send the value returned by
/// `POST /restrictions/evaluate` when the record was written; an omitted
/// flag reads as `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummaryRequest {
    /// The date to evaluate; defaults to the server's local date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Look-ahead window for expirations, in days.
    #[serde(default)]
    pub window_days: Option<u32>,
    /// Every person on the roster with their records.
    pub personnel: Vec<PersonRecords>,
}
