//! Permission resolution for the signed-in principal.

use std::collections::HashSet;
use std::sync::Arc;

use vestry_entity::role::Role;

use crate::directory::TenancyDirectory;
use crate::session::SessionContext;

/// The one capability that is never gated.
///
/// Sign-out must stay reachable in every state, including a pending
/// account and a half-loaded directory, so the resolver grants it
/// before consulting any data. This is a deliberate policy override.
pub const LOGOUT_PERMISSION: &str = "logout";

/// Answers "may the current principal do X?" for every surface.
///
/// Checks are synchronous, side-effect free and never touch the
/// network, so they are safe to call on every render. The resolver
/// fails closed: with no principal, no assigned role, or tenancy data
/// not yet loaded, everything except [`LOGOUT_PERMISSION`] is denied.
/// It never returns an error and never panics.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    /// The session whose principal is being checked.
    session: SessionContext,
    /// The tenancy snapshot holding role→permission data.
    directory: Arc<TenancyDirectory>,
}

impl PermissionResolver {
    /// Create a resolver over the given session and directory.
    pub fn new(session: SessionContext, directory: Arc<TenancyDirectory>) -> Self {
        Self { session, directory }
    }

    /// Check whether the current principal holds the named permission.
    ///
    /// Matching is exact, case-sensitive membership of the principal's
    /// role permission set. Unknown permission names are an ordinary
    /// denial, not an error.
    pub fn has_permission(&self, permission_name: &str) -> bool {
        if permission_name == LOGOUT_PERMISSION {
            return true;
        }
        let Some(role_id) = self.session.principal_role_id() else {
            return false;
        };
        self.directory.role_grants(role_id, permission_name)
    }

    /// The current principal's role record.
    ///
    /// `None` for guests, pending principals, and roles the directory
    /// has not loaded yet.
    pub fn current_role(&self) -> Option<Role> {
        let role_id = self.session.principal_role_id()?;
        self.directory.role(role_id)
    }

    /// The names of every permission the current principal holds.
    ///
    /// Empty for guests and pending principals. Note this reflects role
    /// data only; [`LOGOUT_PERMISSION`] is granted regardless of
    /// membership here.
    pub fn permission_names(&self) -> HashSet<String> {
        self.session
            .principal_role_id()
            .map(|role_id| self.directory.permissions_of(role_id))
            .unwrap_or_default()
    }
}
