//! Permission entity model.

use serde::{Deserialize, Serialize};
use vestry_core::types::PermissionId;

/// A named capability.
///
/// The name string is the permission's identity for authorization
/// purposes: checks match it exactly and case-sensitively. Permissions
/// carry no parameters or conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: PermissionId,
    /// The capability name, e.g. `"Manage Organization Accounts"`.
    pub name: String,
}
