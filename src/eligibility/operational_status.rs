//! Operational status resolution.
//!
//! A person's status is a pure classification of their active leaves and
//! restrictions on a reference date. Precedence is fixed: an active leave
//! wins over an active restriction, which wins over neither.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Leave, OperationalStatus, RecordId, Restriction};

/// Rule id recorded in audit steps produced by this module.
pub const OPERATIONAL_STATUS_RULE_ID: &str = "operational_status";

/// A resolved status together with the records that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResolution {
    /// The date the status was evaluated for.
    pub reference_date: NaiveDate,
    /// The resolved status.
    pub status: OperationalStatus,
    /// Leaves in force on the reference date.
    pub active_leave_ids: Vec<RecordId>,
    /// Restrictions in force on the reference date.
    pub active_restriction_ids: Vec<RecordId>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves a person's operational status on `reference_date`.
///
/// Historical, future and soft-deleted records may be passed in; only those
/// in force on the reference date count.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::resolve_operational_status;
/// use eligibility_engine::models::OperationalStatus;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// assert_eq!(resolve_operational_status(today, &[], &[]), OperationalStatus::Fit);
/// ```
pub fn resolve_operational_status(
    reference_date: NaiveDate,
    restrictions: &[Restriction],
    leaves: &[Leave],
) -> OperationalStatus {
    if leaves.iter().any(|l| l.is_active_on(reference_date)) {
        OperationalStatus::OnLeave
    } else if restrictions.iter().any(|r| r.is_active_on(reference_date)) {
        OperationalStatus::FitWithRestriction
    } else {
        OperationalStatus::Fit
    }
}

/// Resolves a person's operational status on the local calendar date.
pub fn resolve_operational_status_today(
    restrictions: &[Restriction],
    leaves: &[Leave],
) -> OperationalStatus {
    resolve_operational_status(Local::now().date_naive(), restrictions, leaves)
}

/// Resolves a person's status and reports which records produced it.
pub fn explain_operational_status(
    reference_date: NaiveDate,
    restrictions: &[Restriction],
    leaves: &[Leave],
    step_number: u32,
) -> StatusResolution {
    let status = resolve_operational_status(reference_date, restrictions, leaves);

    let active_leave_ids: Vec<RecordId> = leaves
        .iter()
        .filter(|l| l.is_active_on(reference_date))
        .map(|l| l.id)
        .collect();
    let active_restriction_ids: Vec<RecordId> = restrictions
        .iter()
        .filter(|r| r.is_active_on(reference_date))
        .map(|r| r.id)
        .collect();

    let reasoning = match status {
        OperationalStatus::OnLeave if !active_restriction_ids.is_empty() => format!(
            "On leave ({} active); leave takes precedence over {} active restriction(s)",
            active_leave_ids.len(),
            active_restriction_ids.len()
        ),
        OperationalStatus::OnLeave => {
            format!("On leave ({} active)", active_leave_ids.len())
        }
        OperationalStatus::FitWithRestriction => format!(
            "No active leave; {} active restriction(s)",
            active_restriction_ids.len()
        ),
        OperationalStatus::Fit => "No active leave or restriction".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: OPERATIONAL_STATUS_RULE_ID.to_string(),
        rule_name: "Operational Status".to_string(),
        regulation_ref: "-".to_string(),
        input: serde_json::json!({
            "reference_date": reference_date.to_string(),
            "restrictions": restrictions.len(),
            "leaves": leaves.len()
        }),
        output: serde_json::json!({
            "status": status,
            "active_leave_ids": active_leave_ids,
            "active_restriction_ids": active_restriction_ids
        }),
        reasoning,
    };

    StatusResolution {
        reference_date,
        status,
        active_leave_ids,
        active_restriction_ids,
        audit_step,
    }
}
