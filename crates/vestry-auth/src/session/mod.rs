//! Session state held between sign-in and sign-out.

pub mod context;
pub mod store;

pub use context::{SessionContext, SessionSnapshot};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};
