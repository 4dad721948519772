//! Shared type definitions.

pub mod id;

pub use id::{DepartmentId, HeadquartersId, OrganizationId, PermissionId, RoleId, UserId};
