//! Restriction code rules.
//!
//! This module canonicalizes a collection of restriction codes: it normalizes
//! them, validates them against the catalog, applies the mandatory
//! implication rule and flags critical codes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Catalog;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Rule id recorded in audit steps produced by this module.
pub const RESTRICTION_RULES_ID: &str = "restriction_rules";

/// The canonical form of a restriction code collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionRuleOutcome {
    /// Unique uppercase codes, sorted lexicographically.
    pub canonical_codes: Vec<String>,
    /// True when the canonical set contains a critical code.
    pub has_critical: bool,
    /// Human-readable warnings, implication before criticality.
    pub warnings: Vec<String>,
}

impl RestrictionRuleOutcome {
    /// Records this outcome as an audit step.
    pub fn audit_step<S: AsRef<str>>(
        &self,
        input_codes: &[S],
        catalog: &Catalog,
        step_number: u32,
    ) -> AuditStep {
        let input: Vec<&str> = input_codes.iter().map(AsRef::as_ref).collect();
        let reasoning = if self.warnings.is_empty() {
            format!(
                "Codes canonicalized to [{}]; no implication or critical code applies",
                self.canonical_codes.join(", ")
            )
        } else {
            format!(
                "Codes canonicalized to [{}]; {}",
                self.canonical_codes.join(", "),
                self.warnings.join("; ")
            )
        };

        AuditStep {
            step_number,
            rule_id: RESTRICTION_RULES_ID.to_string(),
            rule_name: "Restriction Code Rules".to_string(),
            regulation_ref: catalog.implication().source.clone(),
            input: serde_json::json!({ "codes": input }),
            output: serde_json::json!({
                "canonical_codes": self.canonical_codes,
                "has_critical": self.has_critical,
                "warnings": self.warnings
            }),
            reasoning,
        }
    }
}

/// Canonicalizes and validates a collection of restriction codes.
///
/// The steps run in a fixed order:
/// 1. Normalize: trim, uppercase, deduplicate. Blank entries are dropped.
/// 2. Validate every code against the catalog, collecting all unknown codes.
/// 3. Apply the implication rule once. The implied code never triggers a
///    further implication.
/// 4. Flag critical codes.
///
/// # Errors
///
/// - [`EngineError::InvalidCodes`] listing every unknown code, in first-seen order
/// - [`EngineError::EmptyCodeSet`] if nothing remains after normalization
///
/// # Examples
///
/// ```
/// use eligibility_engine::config::CatalogLoader;
/// use eligibility_engine::eligibility::apply_restriction_rules;
///
/// let loader = CatalogLoader::builtin().unwrap();
/// let outcome = apply_restriction_rules(&["se", " DV "], loader.catalog()).unwrap();
///
/// assert_eq!(outcome.canonical_codes, vec!["DV", "SE", "UU"]);
/// assert!(outcome.has_critical);
/// assert_eq!(outcome.warnings.len(), 2);
/// ```
pub fn apply_restriction_rules<S: AsRef<str>>(
    codes: &[S],
    catalog: &Catalog,
) -> EngineResult<RestrictionRuleOutcome> {
    let mut canonical: BTreeSet<String> = BTreeSet::new();
    let mut unknown: Vec<String> = Vec::new();

    for raw in codes {
        let code = raw.as_ref().trim().to_uppercase();
        if code.is_empty() {
            continue;
        }
        if catalog.restriction_code(&code).is_some() {
            canonical.insert(code);
        } else if !unknown.contains(&code) {
            unknown.push(code);
        }
    }

    if !unknown.is_empty() {
        return Err(EngineError::InvalidCodes { codes: unknown });
    }
    if canonical.is_empty() {
        return Err(EngineError::EmptyCodeSet);
    }

    let mut warnings = Vec::new();

    let rule = catalog.implication();
    if canonical.contains(&rule.code) && !canonical.contains(&rule.implies) {
        canonical.insert(rule.implies.clone());
        debug!(code = %rule.code, implied = %rule.implies, "Implied restriction code added");
        warnings.push(format!(
            "Code {} added automatically per {} ({} implies {})",
            rule.implies, rule.source, rule.code, rule.implies
        ));
    }

    let critical: Vec<&str> = canonical
        .iter()
        .map(String::as_str)
        .filter(|code| catalog.is_critical(code))
        .collect();
    let has_critical = !critical.is_empty();
    if has_critical {
        warnings.push(format!(
            "Critical codes present: {}. They severely limit operational deployment.",
            critical.join(", ")
        ));
    }

    Ok(RestrictionRuleOutcome {
        canonical_codes: canonical.into_iter().collect(),
        has_critical,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogLoader;

    fn catalog() -> Catalog {
        CatalogLoader::builtin().unwrap().into_catalog()
    }

    #[test]
    fn test_lowercase_unsorted_codes_are_canonicalized() {
        let outcome = apply_restriction_rules(&["lp", "ef"], &catalog()).unwrap();

        assert_eq!(outcome.canonical_codes, vec!["EF", "LP"]);
        assert!(!outcome.has_critical);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_duplicates_and_whitespace_collapse() {
        let outcome = apply_restriction_rules(&[" ef", "EF ", "Ef", "\tlp\n"], &catalog()).unwrap();
        assert_eq!(outcome.canonical_codes, vec!["EF", "LP"]);
    }

    #[test]
    fn test_se_implies_uu_with_warning() {
        let outcome = apply_restriction_rules(&["SE"], &catalog()).unwrap();

        assert_eq!(outcome.canonical_codes, vec!["SE", "UU"]);
        assert!(outcome.has_critical);
        assert_eq!(outcome.warnings.len(), 2);
        assert_eq!(
            outcome.warnings[0],
            "Code UU added automatically per BG PM 232/08 (SE implies UU)"
        );
        assert_eq!(
            outcome.warnings[1],
            "Critical codes present: SE. They severely limit operational deployment."
        );
    }

    #[test]
    fn test_se_with_uu_already_present_has_no_implication_warning() {
        let outcome = apply_restriction_rules(&["uu", "se"], &catalog()).unwrap();

        assert_eq!(outcome.canonical_codes, vec!["SE", "UU"]);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].starts_with("Critical codes present: SE."));
    }

    #[test]
    fn test_uu_alone_is_not_critical() {
        let outcome = apply_restriction_rules(&["UU"], &catalog()).unwrap();

        assert_eq!(outcome.canonical_codes, vec!["UU"]);
        assert!(!outcome.has_critical);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_critical_warning_names_exactly_the_critical_codes() {
        let outcome = apply_restriction_rules(&["UA", "EF", "PO", "DV"], &catalog()).unwrap();

        assert!(outcome.has_critical);
        assert_eq!(
            outcome.warnings,
            vec!["Critical codes present: DV, PO, UA. They severely limit operational deployment."]
        );
    }

    #[test]
    fn test_unknown_codes_are_all_reported() {
        let result = apply_restriction_rules(&["XX", "UA", "YY"], &catalog());

        match result {
            Err(EngineError::InvalidCodes { codes }) => assert_eq!(codes, vec!["XX", "YY"]),
            other => panic!("Expected InvalidCodes, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_codes_are_normalized_and_deduplicated() {
        let result = apply_restriction_rules(&["zz", " ZZ", "se"], &catalog());

        match result {
            Err(EngineError::InvalidCodes { codes }) => assert_eq!(codes, vec!["ZZ"]),
            other => panic!("Expected InvalidCodes, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code_fails_before_implication() {
        // SE would add UU, but the unknown code must still abort the call.
        let result = apply_restriction_rules(&["SE", "QQ"], &catalog());
        assert!(matches!(result, Err(EngineError::InvalidCodes { .. })));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            apply_restriction_rules(&empty, &catalog()),
            Err(EngineError::EmptyCodeSet)
        ));
    }

    #[test]
    fn test_blank_codes_are_rejected_as_empty() {
        assert!(matches!(
            apply_restriction_rules(&["  ", ""], &catalog()),
            Err(EngineError::EmptyCodeSet)
        ));
    }

    #[test]
    fn test_reapplying_to_canonical_output_is_stable() {
        let catalog = catalog();
        let first = apply_restriction_rules(&["se", "dv", "ef"], &catalog).unwrap();
        let second = apply_restriction_rules(first.canonical_codes.as_slice(), &catalog).unwrap();

        assert_eq!(first.canonical_codes, second.canonical_codes);
        assert_eq!(first.has_critical, second.has_critical);
    }

    #[test]
    fn test_audit_step_records_input_and_output() {
        let catalog = catalog();
        let input = ["se"];
        let outcome = apply_restriction_rules(&input, &catalog).unwrap();
        let step = outcome.audit_step(&input, &catalog, 3);

        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, RESTRICTION_RULES_ID);
        assert_eq!(step.regulation_ref, "BG PM 232/08");
        assert_eq!(step.input["codes"][0], "se");
        assert_eq!(step.output["canonical_codes"][1], "UU");
        assert_eq!(step.output["has_critical"], true);
    }
}
