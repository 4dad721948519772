//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vestry_core::types::{HeadquartersId, OrganizationId};

/// An organization within the tenancy hierarchy.
///
/// Organizations usually belong to a headquarters, but standalone
/// organizations (no parent) are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization identifier.
    pub id: OrganizationId,
    /// The headquarters this organization belongs to, if any.
    pub headquarters_id: Option<HeadquartersId>,
    /// Display name.
    pub name: String,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Check whether this organization is attached to a headquarters.
    pub fn has_headquarters(&self) -> bool {
        self.headquarters_id.is_some()
    }
}
