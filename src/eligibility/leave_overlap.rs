//! Leave overlap validation.
//!
//! This module decides whether a proposed leave collides with a person's
//! existing leaves. Boundary days are occupied by both intervals, so two
//! leaves that share a single day conflict.
//!
//! Open-ended intervals (indeterminate, or without an end date) have no
//! concrete right edge and extend to infinity. A closed-interval formula
//! cannot express that, which is why the check branches on which side is
//! open-ended.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, Leave, LeaveInterval, PersonId, RecordId};

/// Rule id recorded in audit steps produced by this module.
pub const LEAVE_OVERLAP_RULE_ID: &str = "leave_overlap";

/// A leave interval proposed for one person, for creation or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedLeave {
    /// The person the leave is for.
    pub person_id: PersonId,
    /// The interval the leave would cover.
    pub interval: LeaveInterval,
    /// The record being edited, which must not conflict with itself.
    #[serde(default)]
    pub exclude_id: Option<RecordId>,
}

/// Returns true if two leave intervals share at least one day.
///
/// The verdict is symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::intervals_overlap;
/// use eligibility_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
///
/// let first = LeaveInterval::bounded(d(1, 1), d(1, 10));
/// let touching = LeaveInterval::bounded(d(1, 10), d(1, 20));
/// let after = LeaveInterval::bounded(d(1, 11), d(1, 20));
///
/// assert!(intervals_overlap(&first, &touching));
/// assert!(!intervals_overlap(&first, &after));
///
/// let open = LeaveInterval::indeterminate(d(3, 1));
/// assert!(intervals_overlap(&open, &LeaveInterval::bounded(d(4, 1), d(4, 10))));
/// assert!(!intervals_overlap(&open, &LeaveInterval::bounded(d(2, 1), d(2, 28))));
/// ```
pub fn intervals_overlap(proposed: &LeaveInterval, existing: &LeaveInterval) -> bool {
    match (proposed.effective_end(), existing.effective_end()) {
        // Both bounded: inclusive closed-interval test.
        (Some(proposed_end), Some(existing_end)) => {
            !(proposed.start_date > existing_end || existing.start_date > proposed_end)
        }
        // Proposed open-ended: clear only if the existing one ends before it starts.
        (None, existing_end) => existing_end.is_none_or(|end| end >= proposed.start_date),
        // Existing open-ended: clear only if the proposed one ends before it starts.
        (Some(proposed_end), None) => proposed_end >= existing.start_date,
    }
}

/// Finds the first existing leave that conflicts with a proposed one.
///
/// Existing records are scanned in the order supplied. Records that are
/// soft-deleted, belong to another person, or carry the proposal's
/// `exclude_id` are skipped. A conflict is an ordinary outcome, not an error.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::{find_leave_conflict, ProposedLeave};
/// use eligibility_engine::models::{Leave, LeaveInterval};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let existing = vec![Leave {
///     id: 101,
///     person_id: 3,
///     leave_type: "FERIAS".to_string(),
///     start_date: d(2, 1),
///     end_date: Some(d(3, 2)),
///     indeterminate: false,
///     document: String::new(),
///     deleted: false,
/// }];
///
/// let proposed = ProposedLeave {
///     person_id: 3,
///     interval: LeaveInterval::bounded(d(3, 2), d(3, 10)),
///     exclude_id: None,
/// };
/// assert_eq!(find_leave_conflict(&proposed, &existing).map(|l| l.id), Some(101));
///
/// // Editing leave 101 itself does not conflict.
/// let edit = ProposedLeave { exclude_id: Some(101), ..proposed };
/// assert!(find_leave_conflict(&edit, &existing).is_none());
/// ```
pub fn find_leave_conflict<'a>(proposed: &ProposedLeave, existing: &'a [Leave]) -> Option<&'a Leave> {
    let conflict = existing
        .iter()
        .filter(|leave| !leave.deleted)
        .filter(|leave| leave.person_id == proposed.person_id)
        .filter(|leave| Some(leave.id) != proposed.exclude_id)
        .find(|leave| intervals_overlap(&proposed.interval, &leave.interval()));

    if let Some(leave) = conflict {
        debug!(
            person_id = proposed.person_id,
            conflicting_leave_id = leave.id,
            "Leave conflict found"
        );
    }

    conflict
}

/// Records an overlap check as an audit step.
pub fn leave_overlap_audit_step(
    proposed: &ProposedLeave,
    conflict: Option<&Leave>,
    step_number: u32,
) -> AuditStep {
    let reasoning = match conflict {
        Some(leave) => format!(
            "Proposed leave overlaps existing {} leave {} starting {}",
            leave.leave_type, leave.id, leave.start_date
        ),
        None => "Proposed leave does not overlap any existing leave".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: LEAVE_OVERLAP_RULE_ID.to_string(),
        rule_name: "Leave Overlap".to_string(),
        regulation_ref: "-".to_string(),
        input: serde_json::json!({
            "person_id": proposed.person_id,
            "start_date": proposed.interval.start_date.to_string(),
            "end_date": proposed.interval.end_date.map(|d| d.to_string()),
            "indeterminate": proposed.interval.indeterminate,
            "exclude_id": proposed.exclude_id
        }),
        output: serde_json::json!({
            "conflict": conflict.is_some(),
            "conflicting_leave_id": conflict.map(|l| l.id)
        }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn bounded(start: &str, end: &str) -> LeaveInterval {
        LeaveInterval::bounded(date(start), date(end))
    }

    fn open(start: &str) -> LeaveInterval {
        LeaveInterval::indeterminate(date(start))
    }

    fn leave(id: RecordId, interval: LeaveInterval) -> Leave {
        Leave {
            id,
            person_id: 3,
            leave_type: "FERIAS".to_string(),
            start_date: interval.start_date,
            end_date: interval.end_date,
            indeterminate: interval.indeterminate,
            document: String::new(),
            deleted: false,
        }
    }

    fn proposal(interval: LeaveInterval) -> ProposedLeave {
        ProposedLeave {
            person_id: 3,
            interval,
            exclude_id: None,
        }
    }

    // ==========================================================================
    // Bounded intervals
    // ==========================================================================

    #[test]
    fn test_shared_boundary_day_conflicts() {
        let a = bounded("2026-01-01", "2026-01-10");
        let b = bounded("2026-01-10", "2026-01-20");
        assert!(intervals_overlap(&a, &b));
        assert!(intervals_overlap(&b, &a));
    }

    #[test]
    fn test_adjacent_days_do_not_conflict() {
        let a = bounded("2026-01-01", "2026-01-10");
        let b = bounded("2026-01-11", "2026-01-20");
        assert!(!intervals_overlap(&a, &b));
        assert!(!intervals_overlap(&b, &a));
    }

    #[test]
    fn test_containment_conflicts() {
        let outer = bounded("2026-01-01", "2026-01-31");
        let inner = bounded("2026-01-10", "2026-01-12");
        assert!(intervals_overlap(&outer, &inner));
        assert!(intervals_overlap(&inner, &outer));
    }

    #[test]
    fn test_single_day_leaves() {
        let a = bounded("2026-01-05", "2026-01-05");
        assert!(intervals_overlap(&a, &a));
        assert!(!intervals_overlap(&a, &bounded("2026-01-06", "2026-01-06")));
    }

    // ==========================================================================
    // Open-ended intervals
    // ==========================================================================

    #[test]
    fn test_open_proposal_conflicts_with_later_bounded_leave() {
        assert!(intervals_overlap(
            &open("2026-03-01"),
            &bounded("2026-04-01", "2026-04-10")
        ));
    }

    #[test]
    fn test_open_proposal_clear_of_leave_ending_before_start() {
        assert!(!intervals_overlap(
            &open("2026-03-01"),
            &bounded("2026-02-01", "2026-02-28")
        ));
    }

    #[test]
    fn test_open_proposal_conflicts_with_leave_ending_on_start_day() {
        assert!(intervals_overlap(
            &open("2026-03-01"),
            &bounded("2026-02-01", "2026-03-01")
        ));
    }

    #[test]
    fn test_existing_open_leave_blocks_later_proposals() {
        let existing = open("2026-03-01");
        assert!(intervals_overlap(&bounded("2026-03-05", "2026-03-06"), &existing));
        assert!(intervals_overlap(&bounded("2026-02-20", "2026-03-01"), &existing));
        assert!(!intervals_overlap(&bounded("2026-02-20", "2026-02-28"), &existing));
    }

    #[test]
    fn test_two_open_intervals_always_conflict() {
        assert!(intervals_overlap(&open("2026-03-01"), &open("2030-01-01")));
        assert!(intervals_overlap(&open("2030-01-01"), &open("2026-03-01")));
    }

    #[test]
    fn test_missing_end_date_is_treated_as_open() {
        let no_end = LeaveInterval {
            start_date: date("2026-03-01"),
            end_date: None,
            indeterminate: false,
        };
        assert!(intervals_overlap(&no_end, &bounded("2027-01-01", "2027-01-02")));
    }

    #[test]
    fn test_indeterminate_end_date_is_ignored() {
        // An indeterminate leave that happens to carry an end date still
        // extends to infinity.
        let existing = LeaveInterval {
            start_date: date("2026-03-01"),
            end_date: Some(date("2026-03-05")),
            indeterminate: true,
        };
        assert!(intervals_overlap(&bounded("2026-06-01", "2026-06-02"), &existing));
        assert!(intervals_overlap(&open("2026-06-01"), &existing));
    }

    // ==========================================================================
    // Conflict search
    // ==========================================================================

    #[test]
    fn test_no_existing_leaves_means_no_conflict() {
        assert!(find_leave_conflict(&proposal(open("2026-01-01")), &[]).is_none());
    }

    #[test]
    fn test_first_conflict_in_supplied_order_is_returned() {
        let existing = vec![
            leave(1, bounded("2026-01-01", "2026-01-05")),
            leave(2, bounded("2026-02-01", "2026-02-05")),
            leave(3, open("2026-01-20")),
        ];

        let found = find_leave_conflict(&proposal(bounded("2026-02-03", "2026-02-04")), &existing);
        assert_eq!(found.map(|l| l.id), Some(2));
    }

    #[test]
    fn test_deleted_leaves_are_ignored() {
        let mut cancelled = leave(1, bounded("2026-01-01", "2026-01-31"));
        cancelled.deleted = true;

        let existing = [cancelled];
        let found = find_leave_conflict(&proposal(bounded("2026-01-10", "2026-01-11")), &existing);
        assert!(found.is_none());
    }

    #[test]
    fn test_other_peoples_leaves_are_ignored() {
        let mut someone_else = leave(1, bounded("2026-01-01", "2026-01-31"));
        someone_else.person_id = 99;

        let existing = [someone_else];
        let found = find_leave_conflict(&proposal(bounded("2026-01-10", "2026-01-11")), &existing);
        assert!(found.is_none());
    }

    #[test]
    fn test_edit_in_place_excludes_own_record() {
        let existing = vec![
            leave(1, bounded("2026-01-01", "2026-01-10")),
            leave(2, bounded("2026-01-20", "2026-01-25")),
        ];

        let mut edit = proposal(bounded("2026-01-01", "2026-01-15"));
        edit.exclude_id = Some(1);
        assert!(find_leave_conflict(&edit, &existing).is_none());

        edit.interval = bounded("2026-01-01", "2026-01-20");
        assert_eq!(find_leave_conflict(&edit, &existing).map(|l| l.id), Some(2));
    }

    #[test]
    fn test_audit_step_reports_conflict() {
        let existing = vec![leave(7, bounded("2026-01-01", "2026-01-10"))];
        let proposed = proposal(bounded("2026-01-10", "2026-01-12"));
        let conflict = find_leave_conflict(&proposed, &existing);

        let step = leave_overlap_audit_step(&proposed, conflict, 1);
        assert_eq!(step.rule_id, LEAVE_OVERLAP_RULE_ID);
        assert_eq!(step.output["conflict"], true);
        assert_eq!(step.output["conflicting_leave_id"], 7);
        assert!(step.reasoning.contains("FERIAS"));
    }
}
