//! Write-path checks for restriction and leave records.
//!
//! These functions compose the individual rules in the order the API layer
//! runs them before persisting a record. They remain pure: persistence, and
//! serializing the leave check with the subsequent write per person, belong
//! to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Catalog;
use crate::error::EngineResult;
use crate::models::{AuditStep, Leave, LeaveDraft, PersonId, RecordId, Restriction, RestrictionDraft};

use super::confidentiality::scan_medical_opinion;
use super::leave_overlap::{ProposedLeave, find_leave_conflict};
use super::record_validation::{validate_leave_interval, validate_restriction_dates};
use super::restriction_rules::apply_restriction_rules;
use super::service_time::career_impact_warning;

/// A restriction draft that passed every rule, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedRestriction {
    /// The id of the record being edited; `None` for a new restriction.
    pub id: Option<RecordId>,
    /// The restricted person.
    pub person_id: PersonId,
    /// Canonical restriction codes.
    pub codes: Vec<String>,
    /// Free-text medical opinion.
    pub medical_opinion: String,
    /// First day of the restriction (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the restriction (inclusive).
    pub end_date: NaiveDate,
    /// Reference to the supporting document.
    pub document: String,
    /// True when the canonical codes contain a critical code.
    pub has_critical: bool,
    /// Warnings for the case-worker: implication, criticality, confidentiality.
    pub warnings: Vec<String>,
    /// The audit step recording the code rules.
    pub audit_step: AuditStep,
}

impl PreparedRestriction {
    /// Builds the record to persist, under the id assigned by storage.
    pub fn into_restriction(self, id: RecordId) -> Restriction {
        Restriction {
            id,
            person_id: self.person_id,
            codes: self.codes,
            medical_opinion: self.medical_opinion,
            start_date: self.start_date,
            end_date: self.end_date,
            document: self.document,
            has_critical: self.has_critical,
            deleted: false,
        }
    }
}

/// Validates and canonicalizes a restriction draft.
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidRestriction`] if the end date precedes the start date
/// - [`crate::error::EngineError::InvalidCodes`] listing every unknown code
/// - [`crate::error::EngineError::EmptyCodeSet`] if no code was supplied
pub fn prepare_restriction(
    draft: RestrictionDraft,
    catalog: &Catalog,
) -> EngineResult<PreparedRestriction> {
    validate_restriction_dates(draft.id, draft.start_date, draft.end_date)?;

    let outcome = apply_restriction_rules(draft.codes.as_slice(), catalog)?;
    let audit_step = outcome.audit_step(draft.codes.as_slice(), catalog, 1);

    let mut warnings = outcome.warnings;
    if let Some(warning) = scan_medical_opinion(&draft.medical_opinion, catalog) {
        warnings.push(warning);
    }

    Ok(PreparedRestriction {
        id: draft.id,
        person_id: draft.person_id,
        codes: outcome.canonical_codes,
        medical_opinion: draft.medical_opinion,
        start_date: draft.start_date,
        end_date: draft.end_date,
        document: draft.document,
        has_critical: outcome.has_critical,
        warnings,
        audit_step,
    })
}

/// The result of checking a leave request against a person's leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveCheck<'a> {
    /// No overlap; the leave may be persisted.
    Clear {
        /// Warnings for the requester, such as the career impact.
        warnings: Vec<String>,
    },
    /// The first existing leave found to overlap the request.
    Conflict(&'a Leave),
}

impl LeaveCheck<'_> {
    /// Returns true when the request conflicts with an existing leave.
    pub fn is_conflict(&self) -> bool {
        matches!(self, LeaveCheck::Conflict(_))
    }
}

/// Checks a leave request before it is persisted.
///
/// The leave type is looked up first, then the interval is validated, then
/// the overlap check runs against `existing`. When `draft.id` is set, that
/// record is excluded so an edit never conflicts with itself.
///
/// # Errors
///
/// - [`crate::error::EngineError::LeaveTypeNotFound`] for an unknown leave type
/// - [`crate::error::EngineError::InvalidLeave`] for an invalid interval
///
/// # Examples
///
/// ```
/// use eligibility_engine::config::CatalogLoader;
/// use eligibility_engine::eligibility::{check_leave_request, LeaveCheck};
/// use eligibility_engine::models::LeaveDraft;
/// use chrono::NaiveDate;
///
/// let loader = CatalogLoader::builtin().unwrap();
/// let draft = LeaveDraft {
///     id: None,
///     person_id: 3,
///     leave_type: "PRISAO".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end_date: None,
///     indeterminate: true,
///     document: String::new(),
/// };
///
/// match check_leave_request(&draft, &[], loader.catalog()).unwrap() {
///     LeaveCheck::Clear { warnings } => assert_eq!(warnings.len(), 1),
///     LeaveCheck::Conflict(_) => unreachable!(),
/// }
/// ```
pub fn check_leave_request<'a>(
    draft: &LeaveDraft,
    existing: &'a [Leave],
    catalog: &Catalog,
) -> EngineResult<LeaveCheck<'a>> {
    let career_warning = career_impact_warning(&draft.leave_type, catalog)?;

    let interval = draft.interval();
    validate_leave_interval(draft.id, &interval)?;

    let proposed = ProposedLeave {
        person_id: draft.person_id,
        interval,
        exclude_id: draft.id,
    };

    Ok(match find_leave_conflict(&proposed, existing) {
        Some(conflict) => LeaveCheck::Conflict(conflict),
        None => LeaveCheck::Clear {
            warnings: career_warning.into_iter().collect(),
        },
    })
}
