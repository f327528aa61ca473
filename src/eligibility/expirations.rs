//! Upcoming expirations of restrictions and leaves.
//!
//! Case-workers follow up on records about to end: a restriction that lapses
//! returns the person to full duty, a leave that ends brings them back.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Leave, PersonId, RecordId, Restriction};

/// Look-ahead window used when the caller does not supply one.
pub const DEFAULT_EXPIRATION_WINDOW_DAYS: u32 = 7;

/// The kind of record that is about to expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiringKind {
    /// A leave.
    Leave,
    /// A restriction.
    Restriction,
}

/// A record whose last day falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    /// The kind of record.
    pub kind: ExpiringKind,
    /// The id of the record.
    pub record_id: RecordId,
    /// The person holding the record.
    pub person_id: PersonId,
    /// The last day of the record.
    pub end_date: NaiveDate,
    /// Days from the reference date to the end date; 0 means it ends today.
    pub days_remaining: i64,
    /// The leave type, for leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    /// The restriction codes, for restrictions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
    /// Whether a restriction carries a critical code.
    pub has_critical: bool,
}

/// Lists records ending within `window_days` of `reference_date`.
///
/// A record qualifies when its end date lies in
/// `[reference_date, reference_date + window_days]`. Soft-deleted records
/// and open-ended leaves never qualify. Results are sorted by end date, then
/// kind, then id.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::{upcoming_expirations, ExpiringKind};
/// use eligibility_engine::models::Leave;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let leaves = vec![Leave {
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
/// let expiring = upcoming_expirations(d(2, 27), 7, &[], &leaves);
/// assert_eq!(expiring.len(), 1);
/// assert_eq!(expiring[0].kind, ExpiringKind::Leave);
/// assert_eq!(expiring[0].days_remaining, 3);
/// ```
pub fn upcoming_expirations(
    reference_date: NaiveDate,
    window_days: u32,
    restrictions: &[Restriction],
    leaves: &[Leave],
) -> Vec<Expiration> {
    let window_end = reference_date
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let in_window = |end: NaiveDate| reference_date <= end && end <= window_end;

    let expiring_restrictions = restrictions
        .iter()
        .filter(|r| !r.deleted && in_window(r.end_date))
        .map(|r| Expiration {
            kind: ExpiringKind::Restriction,
            record_id: r.id,
            person_id: r.person_id,
            end_date: r.end_date,
            days_remaining: (r.end_date - reference_date).num_days(),
            leave_type: None,
            codes: r.codes.clone(),
            has_critical: r.has_critical,
        });

    let expiring_leaves = leaves
        .iter()
        .filter(|l| !l.deleted && !l.indeterminate)
        .filter_map(|l| l.end_date.filter(|end| in_window(*end)).map(|end| (l, end)))
        .map(|(l, end)| Expiration {
            kind: ExpiringKind::Leave,
            record_id: l.id,
            person_id: l.person_id,
            end_date: end,
            days_remaining: (end - reference_date).num_days(),
            leave_type: Some(l.leave_type.clone()),
            codes: Vec::new(),
            has_critical: false,
        });

    let mut expirations: Vec<Expiration> = expiring_restrictions.chain(expiring_leaves).collect();
    expirations.sort_by_key(|e| (e.end_date, e.kind, e.record_id));
    expirations
}
