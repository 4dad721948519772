//! Department entity model.

use serde::{Deserialize, Serialize};
use vestry_core::types::{DepartmentId, OrganizationId};

use super::DepartmentCategory;

/// A department within an organization.
///
/// Departments own roles; a role never spans departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier.
    pub id: DepartmentId,
    /// The organization this department belongs to.
    pub organization_id: OrganizationId,
    /// Display name.
    pub name: String,
    /// Display grouping.
    pub category: DepartmentCategory,
}
