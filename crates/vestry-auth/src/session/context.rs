//! The per-session credential/principal/tenant context.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use vestry_core::result::AppResult;
use vestry_core::types::{RoleId, UserId};
use vestry_entity::credential::PrincipalCredential;
use vestry_entity::tenant::Tenant;
use vestry_entity::user::User;

use super::store::{MemorySessionStore, SessionStore, StoredSession};

/// Holds the signed-in principal, its credential, and the cached tenant
/// record for one session.
///
/// The context is an explicit dependency: components that need session
/// state receive a clone rather than reading a global. Clones share the
/// same interior state, so a `clear()` through one handle is visible to
/// all. Every mutation writes through to the backing [`SessionStore`].
///
/// Reads are cheap and synchronous so authorization checks can run on
/// every render.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Shared in-memory state.
    inner: Arc<RwLock<StoredSession>>,
    /// Write-through persistence.
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    /// Create a context hydrated from the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> AppResult<Self> {
        let state = store.load()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(state)),
            store,
        })
    }

    /// Create a context with no persistence, for tests and one-shot use.
    pub fn ephemeral() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoredSession::default())),
            store: Arc::new(MemorySessionStore::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoredSession> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoredSession> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store the credential and principal returned by a successful sign-in.
    ///
    /// The token is stored as-is; no local validation is performed. Its
    /// validity is only ever determined by server rejections.
    pub fn set_principal_session(
        &self,
        credential: PrincipalCredential,
        principal: User,
    ) -> AppResult<()> {
        let snapshot = {
            let mut state = self.write();
            state.principal_credential = Some(credential);
            state.principal = Some(principal);
            state.clone()
        };
        debug!(user_id = ?snapshot.principal.as_ref().map(|p| p.id), "Principal session set");
        self.store.save(&snapshot)
    }

    /// Cache the tenant record used for tenant-identity requests.
    pub fn set_tenant_session(&self, tenant: Tenant) -> AppResult<()> {
        let snapshot = {
            let mut state = self.write();
            state.tenant = Some(tenant);
            state.clone()
        };
        self.store.save(&snapshot)
    }

    /// Remove credential, principal, and tenant together.
    ///
    /// Idempotent and safe on an already-empty session. Requests already
    /// in flight keep the [`SessionSnapshot`] they took at dispatch;
    /// subsequent authorization checks treat the principal as
    /// unauthenticated.
    pub fn clear(&self) -> AppResult<()> {
        {
            let mut state = self.write();
            *state = StoredSession::default();
        }
        debug!("Session cleared");
        self.store.clear()
    }

    /// The signed-in principal, if any.
    pub fn principal(&self) -> Option<User> {
        self.read().principal.clone()
    }

    /// The active principal-identity credential, if any.
    pub fn credential(&self) -> Option<PrincipalCredential> {
        self.read().principal_credential.clone()
    }

    /// The cached tenant record, if any.
    pub fn tenant(&self) -> Option<Tenant> {
        self.read().tenant.clone()
    }

    /// The signed-in principal's role id.
    ///
    /// `None` both for a guest session and for a pending principal that
    /// has not been assigned a role yet.
    pub fn principal_role_id(&self) -> Option<RoleId> {
        self.read().principal.as_ref().and_then(|p| p.role_id)
    }

    /// Whether a principal credential is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.read().principal_credential.is_some()
    }

    /// Capture an immutable snapshot of the identity state.
    ///
    /// Requests snapshot once at dispatch and use only the snapshot from
    /// then on, so a concurrent `clear()` cannot alter a request that has
    /// already started.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.read();
        SessionSnapshot {
            credential: state.principal_credential.clone(),
            tenant_scope: state.tenant.as_ref().map(|t| t.scope_id()),
            role_id: state.principal.as_ref().and_then(|p| p.role_id),
            user_id: state.principal.as_ref().map(|p| p.id),
        }
    }
}

/// Immutable capture of the session's identity state at one instant.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// The principal credential at capture time.
    pub credential: Option<PrincipalCredential>,
    /// The cached tenant's scope identifier at capture time.
    pub tenant_scope: Option<Uuid>,
    /// The principal's role at capture time.
    pub role_id: Option<RoleId>,
    /// The principal's id at capture time.
    pub user_id: Option<UserId>,
}

impl SessionSnapshot {
    /// Whether the snapshot holds any identity at all.
    pub fn is_guest(&self) -> bool {
        self.credential.is_none() && self.tenant_scope.is_none()
    }
}
