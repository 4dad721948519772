//! Role entity model.

use serde::{Deserialize, Serialize};
use vestry_core::types::{DepartmentId, PermissionId, RoleId};

use crate::permission::Permission;

/// A named bundle of permissions owned by exactly one department.
///
/// Role payloads from the server embed the attached permission objects;
/// a role fetched without them deserializes with an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: RoleId,
    /// The department this role belongs to.
    pub department_id: DepartmentId,
    /// Display name.
    pub name: String,
    /// Permissions attached to this role.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Iterate over the IDs of the attached permissions.
    pub fn permission_ids(&self) -> impl Iterator<Item = PermissionId> + '_ {
        self.permissions.iter().map(|p| p.id)
    }

    /// Check whether this role carries a permission with the given name.
    ///
    /// Matching is exact and case-sensitive.
    pub fn grants(&self, permission_name: &str) -> bool {
        self.permissions.iter().any(|p| p.name == permission_name)
    }
}
