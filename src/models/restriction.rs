//! Medical restriction model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PersonId, RecordId};

/// A medical restriction held by a person.
///
/// Restrictions are always bounded: they hold from `start_date` through
/// `end_date`, both inclusive. The code set is stored in canonical form
/// (uppercase, deduplicated, implication-expanded, sorted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Unique identifier for the restriction.
    pub id: RecordId,
    /// The restricted person.
    pub person_id: PersonId,
    /// Canonical restriction codes.
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
    /// True when the code set contains a critical code.
    #[serde(default)]
    pub has_critical: bool,
    /// Soft-deletion marker; deleted restrictions are ignored by every rule.
    #[serde(default)]
    pub deleted: bool,
}

impl Restriction {
    /// Returns true if the restriction is in force on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eligibility_engine::models::Restriction;
    /// use chrono::NaiveDate;
    ///
    /// let restriction = Restriction {
    ///     id: 201,
    ///     person_id: 4,
    ///     codes: vec!["EF".to_string(), "LP".to_string()],
    ///     medical_opinion: String::new(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
    ///     document: "Ata JS 55/26".to_string(),
    ///     has_critical: false,
    ///     deleted: false,
    /// };
    /// assert!(restriction.is_active_on(NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()));
    /// assert!(!restriction.is_active_on(NaiveDate::from_ymd_opt(2026, 4, 11).unwrap()));
    /// ```
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        !self.deleted && self.start_date <= date && date <= self.end_date
    }
}

/// A restriction as submitted for creation or edit, before it is persisted.
///
/// Codes are raw user input: any case, possibly duplicated or padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionDraft {
    /// The id of the record being edited; `None` for a new restriction.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// The restricted person.
    pub person_id: PersonId,
    /// Raw restriction codes.
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
