//! Career impact of leave types.
//!
//! Some leave types are excluded from effective service time, which delays
//! promotion and retirement eligibility. Requesting one of them is allowed
//! but the requester is warned.

use crate::config::{Catalog, LeaveType};
use crate::error::{EngineError, EngineResult};

/// Warning attached to leave types excluded from effective service time.
pub const SERVICE_TIME_WARNING: &str =
    "This leave type does NOT count as effective service time for retirement or promotion.";

/// Looks up a leave type in the catalog.
///
/// # Errors
///
/// Returns [`EngineError::LeaveTypeNotFound`] for an unknown leave type.
pub fn lookup_leave_type<'a>(leave_type: &str, catalog: &'a Catalog) -> EngineResult<&'a LeaveType> {
    catalog
        .leave_type(leave_type)
        .ok_or_else(|| EngineError::LeaveTypeNotFound {
            code: leave_type.to_string(),
        })
}

/// Returns the career impact warning for a leave type, if any.
///
/// # Examples
///
/// ```
/// use eligibility_engine::config::CatalogLoader;
/// use eligibility_engine::eligibility::career_impact_warning;
///
/// let loader = CatalogLoader::builtin().unwrap();
/// assert!(career_impact_warning("FERIAS", loader.catalog()).unwrap().is_none());
/// assert!(career_impact_warning("PRISAO", loader.catalog()).unwrap().is_some());
/// assert!(career_impact_warning("UNKNOWN", loader.catalog()).is_err());
/// ```
pub fn career_impact_warning(leave_type: &str, catalog: &Catalog) -> EngineResult<Option<String>> {
    let definition = lookup_leave_type(leave_type, catalog)?;
    Ok((!definition.counts_toward_service_time).then(|| SERVICE_TIME_WARNING.to_string()))
}
