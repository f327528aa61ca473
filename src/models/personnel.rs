//! Person-scoped record bundle.

use serde::{Deserialize, Serialize};

use super::{Leave, PersonId, Restriction};

/// All restriction and leave records of one person, as loaded by the
/// persistence layer. Historical and expired records are included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecords {
    /// The person the records belong to.
    pub person_id: PersonId,
    /// The person's restrictions.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    /// The person's leaves.
    #[serde(default)]
    pub leaves: Vec<Leave>,
}
