//! # vestry-entity
//!
//! Domain entity models for Vestry. Every struct in this crate represents
//! a server resource or a domain value object held in the client session.
//! All entities derive `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod credential;
pub mod department;
pub mod headquarters;
pub mod organization;
pub mod permission;
pub mod role;
pub mod tenant;
pub mod user;

pub use credential::{BearerToken, PrincipalCredential};
pub use department::{Department, DepartmentCategory};
pub use headquarters::Headquarters;
pub use organization::Organization;
pub use permission::Permission;
pub use role::Role;
pub use tenant::{Tenant, TenantRef};
pub use user::{User, UserStatus};
