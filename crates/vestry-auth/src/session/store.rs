//! Persisted session storage.
//!
//! The session survives process restarts through a small JSON document
//! with three stable keys: `principal_credential`, `principal` and
//! `tenant`. The keys are written together and cleared together so the
//! persisted state can never hold a credential without its principal.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use vestry_core::result::AppResult;
use vestry_entity::credential::PrincipalCredential;
use vestry_entity::tenant::Tenant;
use vestry_entity::user::User;

/// The persisted session document.
///
/// All three fields are optional: an empty document is the guest state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// The active principal-identity credential, if signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_credential: Option<PrincipalCredential>,
    /// The signed-in principal, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<User>,
    /// The cached tenant record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
}

impl StoredSession {
    /// Check whether the document holds no state at all.
    pub fn is_empty(&self) -> bool {
        self.principal_credential.is_none() && self.principal.is_none() && self.tenant.is_none()
    }
}

/// Backing storage for session state.
///
/// Implementations must treat absence of stored state as a valid state,
/// never an error.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Load the persisted session. Absent state loads as an empty document.
    fn load(&self) -> AppResult<StoredSession>;

    /// Persist the full session document, replacing any previous state.
    fn save(&self, session: &StoredSession) -> AppResult<()>;

    /// Remove all persisted state. Idempotent.
    fn clear(&self) -> AppResult<()>;
}

/// JSON-file-backed session store.
///
/// A missing file loads as an empty session. A file that cannot be read
/// or parsed also loads as empty, with a warning, so a corrupt session
/// file can never lock a user out of the application.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Path of the session document.
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> AppResult<StoredSession> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredSession::default());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session file; starting empty");
                return Ok(StoredSession::default());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is corrupt; starting empty");
                Ok(StoredSession::default())
            }
        }
    }

    fn save(&self, session: &StoredSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<StoredSession>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AppResult<StoredSession> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, session: &StoredSession) -> AppResult<()> {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session.clone();
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = StoredSession::default();
        Ok(())
    }
}
