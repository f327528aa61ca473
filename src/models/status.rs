//! Operational status model.

use serde::{Deserialize, Serialize};

/// A person's operational status on a given date.
///
/// Never stored: it is derived from the person's restrictions and leaves
/// every time it is read.
///
/// # Example
///
/// ```
/// use eligibility_engine::models::OperationalStatus;
///
/// let status = OperationalStatus::FitWithRestriction;
/// assert_eq!(status.to_string(), "FIT_WITH_RESTRICTION");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalStatus {
    /// No active leave or restriction.
    Fit,
    /// At least one active restriction and no active leave.
    FitWithRestriction,
    /// At least one active leave.
    OnLeave,
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationalStatus::Fit => write!(f, "FIT"),
            OperationalStatus::FitWithRestriction => write!(f, "FIT_WITH_RESTRICTION"),
            OperationalStatus::OnLeave => write!(f, "ON_LEAVE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization_matches_display() {
        for status in [
            OperationalStatus::Fit,
            OperationalStatus::FitWithRestriction,
            OperationalStatus::OnLeave,
        ] {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status)
            );
        }
    }

    #[test]
    fn test_status_deserialization() {
        let status: OperationalStatus = serde_json::from_str("\"ON_LEAVE\"").unwrap();
        assert_eq!(status, OperationalStatus::OnLeave);
    }
}
