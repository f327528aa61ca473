//! Error types for the eligibility engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. Leave conflicts are deliberately
//! absent: an overlapping leave is an ordinary outcome, returned as a value.

use thiserror::Error;

/// The main error type for the eligibility engine.
///
/// # Example
///
/// ```
/// use eligibility_engine::error::EngineError;
///
/// let error = EngineError::InvalidCodes {
///     codes: vec!["XX".to_string(), "YY".to_string()],
/// };
/// assert_eq!(error.to_string(), "Invalid restriction codes: XX, YY");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Catalog content violates its own invariants.
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// A description of the violation.
        message: String,
    },

    /// One or more restriction codes are not present in the catalog.
    ///
    /// Carries every offending code, never just the first one.
    #[error("Invalid restriction codes: {}", codes.join(", "))]
    InvalidCodes {
        /// The normalized codes that were not found, in first-seen order.
        codes: Vec<String>,
    },

    /// A restriction code collection was empty after normalization.
    #[error("Restriction code set is empty")]
    EmptyCodeSet,

    /// A restriction record was invalid.
    #[error("Invalid restriction {}: {message}", describe_id(*restriction_id))]
    InvalidRestriction {
        /// The ID of the restriction, when it has one.
        restriction_id: Option<u64>,
        /// A description of what made the restriction invalid.
        message: String,
    },

    /// A leave record was invalid.
    #[error("Invalid leave {}: {message}", describe_id(*leave_id))]
    InvalidLeave {
        /// The ID of the leave, when it has one.
        leave_id: Option<u64>,
        /// A description of what made the leave invalid.
        message: String,
    },

    /// Leave type was not found in the catalog.
    #[error("Leave type not found: {code}")]
    LeaveTypeNotFound {
        /// The leave type that was not found.
        code: String,
    },
}

fn describe_id(id: Option<u64>) -> String {
    match id {
        Some(id) => format!("'{}'", id),
        None => "(new record)".to_string(),
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/leave_types.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/leave_types.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_codes_lists_every_code() {
        let error = EngineError::InvalidCodes {
            codes: vec!["XX".to_string(), "YY".to_string()],
        };
        assert_eq!(error.to_string(), "Invalid restriction codes: XX, YY");
    }

    #[test]
    fn test_invalid_restriction_displays_id_and_message() {
        let error = EngineError::InvalidRestriction {
            restriction_id: Some(201),
            message: "end date 2026-01-01 is before start date 2026-02-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid restriction '201': end date 2026-01-01 is before start date 2026-02-01"
        );
    }

    #[test]
    fn test_invalid_leave_without_id_mentions_new_record() {
        let error = EngineError::InvalidLeave {
            leave_id: None,
            message: "end date is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid leave (new record): end date is required"
        );
    }

    #[test]
    fn test_leave_type_not_found_displays_code() {
        let error = EngineError::LeaveTypeNotFound {
            code: "SABBATICAL".to_string(),
        };
        assert_eq!(error.to_string(), "Leave type not found: SABBATICAL");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_code_set() -> EngineResult<()> {
            Err(EngineError::EmptyCodeSet)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_code_set()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::EmptyCodeSet)));
    }
}
