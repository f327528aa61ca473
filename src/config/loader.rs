//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the
//! restriction-code and leave-type catalogs from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{Catalog, LeaveTypesFile, RestrictionCatalogFile};

/// File name of the restriction-code catalog inside a catalog directory.
pub const RESTRICTION_CODES_FILE: &str = "restriction_codes.yaml";

/// File name of the leave-type catalog inside a catalog directory.
pub const LEAVE_TYPES_FILE: &str = "leave_types.yaml";

const BUILTIN_RESTRICTION_CODES: &str =
    include_str!("../../config/catalog/restriction_codes.yaml");
const BUILTIN_LEAVE_TYPES: &str = include_str!("../../config/catalog/leave_types.yaml");

/// Loads and provides access to the eligibility catalogs.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── restriction_codes.yaml  # Restriction codes, implication rule, sensitive terms
/// └── leave_types.yaml        # Leave types and service-time flags
/// ```
///
/// # Example
///
/// ```
/// use eligibility_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::builtin().unwrap();
/// let code = loader.catalog().restriction_code("UA").unwrap();
/// assert!(code.critical);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads the catalogs from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` on success, or an error if:
    /// - Either catalog file is missing
    /// - Either file contains invalid YAML
    /// - The catalog content violates its invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eligibility_engine::config::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/catalog")?;
    /// # Ok::<(), eligibility_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let restrictions_path = path.join(RESTRICTION_CODES_FILE);
        let restrictions = Self::parse_yaml::<RestrictionCatalogFile>(
            &Self::read_file(&restrictions_path)?,
            &restrictions_path.display().to_string(),
        )?;

        let leave_types_path = path.join(LEAVE_TYPES_FILE);
        let leave_types = Self::parse_yaml::<LeaveTypesFile>(
            &Self::read_file(&leave_types_path)?,
            &leave_types_path.display().to_string(),
        )?;

        let catalog = Catalog::new(restrictions, leave_types)?;
        tracing::debug!(
            path = %path.display(),
            restriction_codes = catalog.restriction_codes().len(),
            leave_types = catalog.leave_types().len(),
            "Loaded catalogs"
        );

        Ok(Self { catalog })
    }

    /// Loads the catalogs compiled into the crate.
    pub fn builtin() -> EngineResult<Self> {
        Self::from_yaml(BUILTIN_RESTRICTION_CODES, BUILTIN_LEAVE_TYPES)
    }

    /// Parses catalogs from YAML text.
    pub fn from_yaml(restriction_codes: &str, leave_types: &str) -> EngineResult<Self> {
        let restrictions =
            Self::parse_yaml::<RestrictionCatalogFile>(restriction_codes, RESTRICTION_CODES_FILE)?;
        let leave_types = Self::parse_yaml::<LeaveTypesFile>(leave_types, LEAVE_TYPES_FILE)?;

        Ok(Self {
            catalog: Catalog::new(restrictions, leave_types)?,
        })
    }

    fn read_file(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
