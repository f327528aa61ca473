//! Leave model and its date interval.
//!
//! This module defines the [`Leave`] record, the [`LeaveDraft`] submitted when
//! a leave is requested or edited, and the [`LeaveInterval`] shared by both.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PersonId, RecordId};

/// The date interval covered by a leave.
///
/// An interval is open-ended when it is flagged indeterminate or has no end
/// date. An open-ended interval extends to infinity: any end date it carries
/// is ignored.
///
/// # Example
///
/// ```
/// use eligibility_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let interval = LeaveInterval {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end_date: Some(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()),
///     indeterminate: true,
/// };
/// assert!(interval.is_open_ended());
/// assert_eq!(interval.effective_end(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive), if known.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// True when the leave is ongoing by nature, with no end date.
    #[serde(default)]
    pub indeterminate: bool,
}

impl LeaveInterval {
    /// Creates a bounded interval covering `start_date..=end_date`.
    pub fn bounded(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: Some(end_date),
            indeterminate: false,
        }
    }

    /// Creates an indeterminate interval starting on `start_date`.
    pub fn indeterminate(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            indeterminate: true,
        }
    }

    /// Returns true if the interval has no concrete right edge.
    pub fn is_open_ended(&self) -> bool {
        self.indeterminate || self.end_date.is_none()
    }

    /// Returns the last covered day, or `None` when open-ended.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        if self.indeterminate {
            None
        } else {
            self.end_date
        }
    }

    /// Returns true if `date` falls inside the interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.effective_end().is_none_or(|end| end >= date)
    }
}

/// A leave held by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave.
    pub id: RecordId,
    /// The person on leave.
    pub person_id: PersonId,
    /// The leave type id from the leave-type catalog (e.g., "FERIAS").
    pub leave_type: String,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive), absent when indeterminate.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// True when the leave has no fixed end date.
    #[serde(default)]
    pub indeterminate: bool,
    /// Reference to the supporting document.
    #[serde(default)]
    pub document: String,
    /// Soft-deletion marker; deleted leaves are ignored by every rule.
    #[serde(default)]
    pub deleted: bool,
}

impl Leave {
    /// Returns the interval covered by this leave.
    pub fn interval(&self) -> LeaveInterval {
        LeaveInterval {
            start_date: self.start_date,
            end_date: self.end_date,
            indeterminate: self.indeterminate,
        }
    }

    /// Returns true if the leave is in force on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eligibility_engine::models::Leave;
    /// use chrono::NaiveDate;
    ///
    /// let leave = Leave {
    ///     id: 101,
    ///     person_id: 3,
    ///     leave_type: "FERIAS".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     end_date: Some(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
    ///     indeterminate: false,
    ///     document: "Bol Int 012/26".to_string(),
    ///     deleted: false,
    /// };
    /// assert!(leave.is_active_on(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
    /// assert!(!leave.is_active_on(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()));
    /// ```
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        !self.deleted && self.interval().contains(date)
    }
}

/// A leave as submitted for creation or edit, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDraft {
    /// The id of the record being edited; `None` for a new leave.
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
}

impl LeaveDraft {
    /// Returns the interval the draft would cover.
    pub fn interval(&self) -> LeaveInterval {
        LeaveInterval {
            start_date: self.start_date,
            end_date: self.end_date,
            indeterminate: self.indeterminate,
        }
    }
}
