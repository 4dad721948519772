//! Principal (user) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vestry_core::types::{RoleId, UserId};

use crate::tenant::TenantRef;

use super::UserStatus;

/// The signed-in principal.
///
/// A user record exists in the session only between successful
/// authentication and sign-out (or credential expiry). A user with no
/// role is pending assignment and holds no capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Contact email, if provided.
    pub email: Option<String>,
    /// The tenant this user belongs to.
    pub tenant: TenantRef,
    /// The user's assigned role (`None` while pending).
    pub role_id: Option<RoleId>,
    /// Account lifecycle status.
    pub status: UserStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check whether the user has been assigned a role.
    pub fn has_role(&self) -> bool {
        self.role_id.is_some()
    }
}
