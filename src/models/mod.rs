//! Core data models for the eligibility engine.
//!
//! This module contains the person-scoped records the rules operate on and
//! the values they produce.

mod audit;
mod leave;
mod personnel;
mod restriction;
mod status;

pub use audit::AuditStep;
pub use leave::{Leave, LeaveDraft, LeaveInterval};
pub use personnel::PersonRecords;
pub use restriction::{Restriction, RestrictionDraft};
pub use status::OperationalStatus;

/// Identifier of a person.
pub type PersonId = u64;

/// Identifier of a restriction or leave record.
pub type RecordId = u64;
