//! Eligibility rules for the engine.
//!
//! This module contains the pure rule functions: restriction code
//! canonicalization with the mandatory implication and critical flags, leave
//! overlap detection, operational status resolution, the medical-opinion
//! confidentiality scan, the career impact of leave types, upcoming
//! expirations and the roster summary. The write-path helpers in
//! `preparation` compose them in the order records are checked before they
//! are persisted.

mod confidentiality;
mod expirations;
mod leave_overlap;
mod operational_status;
mod preparation;
mod record_validation;
mod restriction_rules;
mod roster;
mod service_time;

pub use confidentiality::{CONFIDENTIALITY_WARNING, find_sensitive_terms, scan_medical_opinion};
pub use expirations::{
    DEFAULT_EXPIRATION_WINDOW_DAYS, Expiration, ExpiringKind, upcoming_expirations,
};
pub use leave_overlap::{
    LEAVE_OVERLAP_RULE_ID, ProposedLeave, find_leave_conflict, intervals_overlap,
    leave_overlap_audit_step,
};
pub use operational_status::{
    OPERATIONAL_STATUS_RULE_ID, StatusResolution, explain_operational_status,
    resolve_operational_status, resolve_operational_status_today,
};
pub use preparation::{LeaveCheck, PreparedRestriction, check_leave_request, prepare_restriction};
pub use record_validation::{validate_leave_interval, validate_restriction_dates};
pub use restriction_rules::{RESTRICTION_RULES_ID, RestrictionRuleOutcome, apply_restriction_rules};
pub use roster::{CriticalRestrictionAlert, PersonStatus, RosterSummary, summarize_roster};
pub use service_time::{SERVICE_TIME_WARNING, career_impact_warning, lookup_leave_type};
