//! Headquarters entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vestry_core::types::HeadquartersId;

/// The top level of the tenancy hierarchy.
///
/// A headquarters owns zero or more organizations and can itself act as
/// the tenant scope of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headquarters {
    /// Unique headquarters identifier.
    pub id: HeadquartersId,
    /// Display name.
    pub name: String,
    /// When the headquarters was created.
    pub created_at: DateTime<Utc>,
}
