//! Date validation for restriction and leave records.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveInterval, RecordId};

/// Validates that a restriction ends on or after the day it starts.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRestriction`] when `end_date < start_date`.
pub fn validate_restriction_dates(
    restriction_id: Option<RecordId>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> EngineResult<()> {
    if end_date < start_date {
        return Err(EngineError::InvalidRestriction {
            restriction_id,
            message: format!(
                "end date {} is before start date {}",
                end_date, start_date
            ),
        });
    }
    Ok(())
}

/// Validates a leave interval.
///
/// A bounded (non-indeterminate) leave must have an end date on or after its
/// start date. An indeterminate leave may carry any end date; it is ignored.
///
/// # Errors
///
/// Returns [`EngineError::InvalidLeave`] describing the violation.
///
/// # Examples
///
/// ```
/// use eligibility_engine::eligibility::validate_leave_interval;
/// use eligibility_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let missing_end = LeaveInterval { start_date: start, end_date: None, indeterminate: false };
///
/// assert!(validate_leave_interval(None, &missing_end).is_err());
/// assert!(validate_leave_interval(None, &LeaveInterval::indeterminate(start)).is_ok());
/// ```
pub fn validate_leave_interval(leave_id: Option<RecordId>, interval: &LeaveInterval) -> EngineResult<()> {
    if interval.indeterminate {
        return Ok(());
    }

    match interval.end_date {
        None => Err(EngineError::InvalidLeave {
            leave_id,
            message: "end date is required unless the leave is indeterminate".to_string(),
        }),
        Some(end) if end < interval.start_date => Err(EngineError::InvalidLeave {
            leave_id,
            message: format!(
                "end date {} is before start date {}",
                end, interval.start_date
            ),
        }),
        Some(_) => Ok(()),
    }
}
