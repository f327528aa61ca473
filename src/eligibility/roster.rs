//! Roster-wide status summary.
//!
//! Aggregates the operational status of every person on a roster and lists
//! the critical restrictions currently in force.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{OperationalStatus, PersonId, PersonRecords, RecordId};

use super::operational_status::resolve_operational_status;

/// The resolved status of one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStatus {
    /// The person.
    pub person_id: PersonId,
    /// Their status on the reference date.
    pub status: OperationalStatus,
}

/// An active restriction carrying a critical code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalRestrictionAlert {
    /// The restricted person.
    pub person_id: PersonId,
    /// The restriction.
    pub restriction_id: RecordId,
    /// The restriction's codes.
    pub codes: Vec<String>,
    /// The last day of the restriction.
    pub end_date: NaiveDate,
}

/// Status counts for a roster on a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// The date the roster was evaluated for.
    pub reference_date: NaiveDate,
    /// Number of people on the roster.
    pub total: usize,
    /// People with no active leave or restriction.
    pub fit: usize,
    /// People with an active restriction and no active leave.
    pub fit_with_restriction: usize,
    /// People with an active leave.
    pub on_leave: usize,
    /// Per-person statuses, in roster order.
    pub statuses: Vec<PersonStatus>,
    /// Active restrictions with a critical code, in roster order.
    pub critical_restrictions: Vec<CriticalRestrictionAlert>,
}

/// Summarizes the operational status of a roster.
///
/// A restriction raises a critical alert when it is active and its stored
/// `has_critical` flag is set. Codes are not re-evaluated here; the flag is
/// the one computed on the write path.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::summarize_roster;
/// use eligibility_engine::models::PersonRecords;
/// use chrono::NaiveDate;
///
/// let roster = vec![PersonRecords { person_id: 1, ..Default::default() }];
/// let summary = summarize_roster(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), &roster);
///
/// assert_eq!(summary.total, 1);
/// assert_eq!(summary.fit, 1);
/// ```
pub fn summarize_roster(reference_date: NaiveDate, personnel: &[PersonRecords]) -> RosterSummary {
    let statuses: Vec<PersonStatus> = personnel
        .iter()
        .map(|person| PersonStatus {
            person_id: person.person_id,
            status: resolve_operational_status(reference_date, &person.restrictions, &person.leaves),
        })
        .collect();

    let count = |wanted: OperationalStatus| statuses.iter().filter(|s| s.status == wanted).count();

    let critical_restrictions = personnel
        .iter()
        .flat_map(|person| {
            person
                .restrictions
                .iter()
                .filter(|r| r.has_critical && r.is_active_on(reference_date))
                .map(|r| CriticalRestrictionAlert {
                    person_id: person.person_id,
                    restriction_id: r.id,
                    codes: r.codes.clone(),
                    end_date: r.end_date,
                })
        })
        .collect();

    RosterSummary {
        reference_date,
        total: personnel.len(),
        fit: count(OperationalStatus::Fit),
        fit_with_restriction: count(OperationalStatus::FitWithRestriction),
        on_leave: count(OperationalStatus::OnLeave),
        statuses,
        critical_restrictions,
    }
}
