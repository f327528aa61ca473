//! Catalog loading and management for the eligibility engine.
//!
//! This module loads the static reference data the rules consult: the
//! restriction-code catalog (with critical flags, the mandatory implication
//! rule and the sensitive-term list) and the leave-type catalog.
//!
//! # Example
//!
//! ```
//! use eligibility_engine::config::CatalogLoader;
//!
//! let loader = CatalogLoader::builtin().unwrap();
//! println!("Loaded {} restriction codes", loader.catalog().restriction_codes().len());
//! ```

mod loader;
mod types;

pub use loader::{CatalogLoader, LEAVE_TYPES_FILE, RESTRICTION_CODES_FILE};
pub use types::{
    Catalog, ImplicationRule, LeaveType, LeaveTypesFile, RestrictionCatalogFile, RestrictionCode,
};
