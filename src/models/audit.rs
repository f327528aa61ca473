//! Audit step model.

use serde::{Deserialize, Serialize};

/// A single step in an evaluation trace, recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application so that a case-worker can see why an answer was produced.
///
/// # Example
///
/// ```
/// use eligibility_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "operational_status".to_string(),
///     rule_name: "Operational Status".to_string(),
///     regulation_ref: "-".to_string(),
///     input: serde_json::json!({ "reference_date": "2026-03-01" }),
///     output: serde_json::json!({ "status": "FIT" }),
///     reasoning: "No active leave or restriction".to_string(),
/// };
/// assert_eq!(step.rule_id, "operational_status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the regulation behind the rule.
    pub regulation_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
