//! Medical-opinion confidentiality scan.
//!
//! Restriction records carry a free-text medical opinion that is visible to
//! administrative staff. This module flags opinions that appear to disclose a
//! confidential diagnosis so that the case-worker can rephrase them.

use crate::config::Catalog;

/// Warning attached when a medical opinion contains a sensitive term.
pub const CONFIDENTIALITY_WARNING: &str = "The medical opinion may contain confidential information. Check compliance with medical confidentiality law.";

/// Returns the sensitive terms found in `opinion`, in catalog order.
///
/// Matching is case-insensitive and substring-based, so `PSIQUIAT` also
/// matches "psiquiatria".
pub fn find_sensitive_terms<'a>(opinion: &str, catalog: &'a Catalog) -> Vec<&'a str> {
    let haystack = opinion.to_uppercase();
    catalog
        .sensitive_terms()
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .map(String::as_str)
        .collect()
}

/// Returns a confidentiality warning if `opinion` contains a sensitive term.
///
/// # Examples
///
/// ```
/// use eligibility_engine::config::CatalogLoader;
/// use eligibility_engine::eligibility::scan_medical_opinion;
///
/// let loader = CatalogLoader::builtin().unwrap();
/// assert!(scan_medical_opinion("Encaminhado ao psiquiatra", loader.catalog()).is_some());
/// assert!(scan_medical_opinion("Fit for administrative duty", loader.catalog()).is_none());
/// ```
pub fn scan_medical_opinion(opinion: &str, catalog: &Catalog) -> Option<String> {
    if find_sensitive_terms(opinion, catalog).is_empty() {
        None
    } else {
        Some(CONFIDENTIALITY_WARNING.to_string())
    }
}
