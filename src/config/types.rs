//! Catalog types for eligibility rules.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML files, and the validated [`Catalog`] that the
//! rule functions consult.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A medical restriction code from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionCode {
    /// What the restricted person may not do.
    pub description: String,
    /// Suggested employment while the restriction holds.
    pub detail: String,
    /// Whether the code materially limits operational deployment.
    #[serde(default)]
    pub critical: bool,
}

/// A mandatory implication between two restriction codes.
///
/// When a code set contains `code`, it must also contain `implies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicationRule {
    /// The originating code.
    pub code: String,
    /// The code that must accompany it.
    pub implies: String,
    /// The regulation that mandates the implication.
    pub source: String,
}

/// Structure of `restriction_codes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RestrictionCatalogFile {
    /// Map of two-letter code to its definition.
    pub codes: BTreeMap<String, RestrictionCode>,
    /// The mandatory implication rule.
    pub implication: ImplicationRule,
    /// Terms that suggest a medical opinion discloses a confidential diagnosis.
    #[serde(default)]
    pub sensitive_terms: Vec<String>,
}

/// A leave type from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// The human-readable name of the leave type.
    pub label: String,
    /// Whether time on this leave counts toward effective service time.
    pub counts_toward_service_time: bool,
    /// Reference to the statute clause defining this leave type.
    pub clause: String,
}

/// Structure of `leave_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesFile {
    /// Map of leave type id to its definition.
    pub leave_types: BTreeMap<String, LeaveType>,
}

/// The complete, validated reference data used by the rule functions.
///
/// A catalog is built once and never mutated afterwards, so it can be
/// shared read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    restriction_codes: BTreeMap<String, RestrictionCode>,
    implication: ImplicationRule,
    sensitive_terms: Vec<String>,
    leave_types: BTreeMap<String, LeaveType>,
}

impl Catalog {
    /// Creates a catalog from its component parts, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCatalog`] if a restriction code is not
    /// two uppercase ASCII letters, if either side of the implication rule is
    /// missing from the code map, or if the implication is reflexive.
    pub fn new(
        restrictions: RestrictionCatalogFile,
        leave_types: LeaveTypesFile,
    ) -> EngineResult<Self> {
        if let Some(bad) = restrictions
            .codes
            .keys()
            .find(|code| code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()))
        {
            return Err(EngineError::InvalidCatalog {
                message: format!("restriction code '{}' is not two uppercase letters", bad),
            });
        }

        let implication = restrictions.implication;
        for side in [&implication.code, &implication.implies] {
            if !restrictions.codes.contains_key(side) {
                return Err(EngineError::InvalidCatalog {
                    message: format!("implication references unknown code '{}'", side),
                });
            }
        }
        if implication.code == implication.implies {
            return Err(EngineError::InvalidCatalog {
                message: format!("implication of '{}' on itself", implication.code),
            });
        }

        let sensitive_terms = restrictions
            .sensitive_terms
            .iter()
            .map(|term| term.trim().to_uppercase())
            .filter(|term| !term.is_empty())
            .collect();

        Ok(Self {
            restriction_codes: restrictions.codes,
            implication,
            sensitive_terms,
            leave_types: leave_types.leave_types,
        })
    }

    /// Returns every restriction code, ordered by code.
    pub fn restriction_codes(&self) -> &BTreeMap<String, RestrictionCode> {
        &self.restriction_codes
    }

    /// Looks up a restriction code. The code must already be normalized.
    pub fn restriction_code(&self, code: &str) -> Option<&RestrictionCode> {
        self.restriction_codes.get(code)
    }

    /// Returns true if the code is flagged critical.
    pub fn is_critical(&self, code: &str) -> bool {
        self.restriction_code(code).is_some_and(|c| c.critical)
    }

    /// Returns the critical codes, in lexicographic order.
    pub fn critical_codes(&self) -> Vec<&str> {
        self.restriction_codes
            .iter()
            .filter(|(_, definition)| definition.critical)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Returns the mandatory implication rule.
    pub fn implication(&self) -> &ImplicationRule {
        &self.implication
    }

    /// Returns the sensitive terms, uppercased.
    pub fn sensitive_terms(&self) -> &[String] {
        &self.sensitive_terms
    }

    /// Returns every leave type, ordered by id.
    pub fn leave_types(&self) -> &BTreeMap<String, LeaveType> {
        &self.leave_types
    }

    /// Looks up a leave type by id.
    pub fn leave_type(&self, id: &str) -> Option<&LeaveType> {
        self.leave_types.get(id)
    }
}
