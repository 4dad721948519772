//! # vestry-auth
//!
//! Session state, tenancy directory, and permission resolution for Vestry.
//!
//! ## Modules
//!
//! - `session` — the per-session credential/principal/tenant context, its
//!   immutable dispatch-time snapshot, and the persisted store behind it
//! - `directory` — the local snapshot of the tenancy hierarchy
//!   (headquarters → organization → department → role → permission)
//! - `resolver` — the capability check every surface consults

pub mod directory;
pub mod resolver;
pub mod session;

pub use directory::TenancyDirectory;
pub use resolver::{LOGOUT_PERMISSION, PermissionResolver};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionContext, SessionSnapshot, SessionStore,
    StoredSession,
};
