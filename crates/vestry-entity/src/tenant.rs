//! Tenant scope types.
//!
//! A tenant is the headquarters or organization a request is scoped to,
//! independent of any individual principal. [`TenantRef`] is the
//! id-only reference carried inside credentials; [`Tenant`] is the full
//! cached record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vestry_core::types::{HeadquartersId, OrganizationId};

use crate::headquarters::Headquarters;
use crate::organization::Organization;

/// Reference to the tenant a principal or credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum TenantRef {
    /// Scoped to a single organization.
    Organization(OrganizationId),
    /// Scoped to a headquarters.
    Headquarters(HeadquartersId),
}

impl TenantRef {
    /// The raw identifier used when scoping requests.
    pub fn scope_id(&self) -> Uuid {
        match self {
            Self::Organization(id) => id.into_uuid(),
            Self::Headquarters(id) => id.into_uuid(),
        }
    }

    /// Check whether this reference points at an organization.
    pub fn is_organization(&self) -> bool {
        matches!(self, Self::Organization(_))
    }
}

impl std::fmt::Display for TenantRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization(id) => write!(f, "organization:{id}"),
            Self::Headquarters(id) => write!(f, "headquarters:{id}"),
        }
    }
}

/// The full cached tenant record for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Tenant {
    /// An organization tenant.
    Organization(Organization),
    /// A headquarters tenant.
    Headquarters(Headquarters),
}

impl Tenant {
    /// The raw identifier used when scoping requests.
    pub fn scope_id(&self) -> Uuid {
        match self {
            Self::Organization(org) => org.id.into_uuid(),
            Self::Headquarters(hq) => hq.id.into_uuid(),
        }
    }

    /// The tenant's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Organization(org) => &org.name,
            Self::Headquarters(hq) => &hq.name,
        }
    }

    /// Produce the id-only reference for this tenant.
    pub fn to_ref(&self) -> TenantRef {
        match self {
            Self::Organization(org) => TenantRef::Organization(org.id),
            Self::Headquarters(hq) => TenantRef::Headquarters(hq.id),
        }
    }
}
