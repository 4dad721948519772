//! Tenancy fetch, merge, and create flows.
//!
//! Every fetch runs under the fallback contract, ingests its list
//! payload tolerantly, and merges the result into the directory so
//! lookups and permission checks see it immediately.

use futures::future::try_join_all;
use serde::Serialize;
use tracing::info;

use vestry_auth::directory::{TenancyDirectory, ingest};
use vestry_core::error::AppError;
use vestry_core::result::AppResult;
use vestry_core::types::{DepartmentId, HeadquartersId, OrganizationId, PermissionId};
use vestry_entity::department::Department;
use vestry_entity::headquarters::Headquarters;
use vestry_entity::organization::Organization;
use vestry_entity::permission::Permission;
use vestry_entity::role::Role;
use vestry_entity::tenant::TenantRef;

use crate::client::{ApiClient, RequestSpec};

/// Fetch a headquarters record and merge it into the directory.
pub async fn fetch_headquarters(
    client: &ApiClient,
    directory: &TenancyDirectory,
    id: HeadquartersId,
) -> AppResult<Headquarters> {
    let headquarters: Headquarters = client.get_json(&format!("/headquarters/{id}")).await?;
    directory.merge_headquarters(headquarters.clone());
    Ok(headquarters)
}

/// Fetch the organizations of a headquarters and merge them.
pub async fn fetch_organizations(
    client: &ApiClient,
    directory: &TenancyDirectory,
    headquarters_id: HeadquartersId,
) -> AppResult<Vec<Organization>> {
    let value = client
        .execute(&RequestSpec::get(format!(
            "/headquarters/{headquarters_id}/organizations"
        )))
        .await?;
    let organizations: Vec<Organization> = ingest::parse_array(value, "organizations");
    directory.merge_organizations(organizations.clone());
    Ok(organizations)
}

/// Fetch the departments of an organization and merge them.
pub async fn fetch_departments(
    client: &ApiClient,
    directory: &TenancyDirectory,
    organization_id: OrganizationId,
) -> AppResult<Vec<Department>> {
    let value = client
        .execute(&RequestSpec::get(format!(
            "/organizations/{organization_id}/departments"
        )))
        .await?;
    let departments: Vec<Department> = ingest::parse_array(value, "departments");
    directory.merge_departments(departments.clone());
    Ok(departments)
}

/// Fetch the roles of a department, permissions embedded, and merge them.
pub async fn fetch_roles(
    client: &ApiClient,
    directory: &TenancyDirectory,
    department_id: DepartmentId,
) -> AppResult<Vec<Role>> {
    let value = client
        .execute(&RequestSpec::get(format!(
            "/departments/{department_id}/roles"
        )))
        .await?;
    let roles: Vec<Role> = ingest::parse_array(value, "roles");
    directory.merge_roles(roles.clone());
    Ok(roles)
}

/// Fetch the permission catalog and merge it.
pub async fn fetch_permissions(
    client: &ApiClient,
    directory: &TenancyDirectory,
) -> AppResult<Vec<Permission>> {
    let value = client.execute(&RequestSpec::get("/permissions")).await?;
    let permissions: Vec<Permission> = ingest::parse_array(value, "permissions");
    directory.merge_permissions(permissions.clone());
    Ok(permissions)
}

/// Counts of what a [`sync`] loaded, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Organizations fetched (headquarters scope only).
    pub organizations: usize,
    /// Departments fetched.
    pub departments: usize,
    /// Roles fetched.
    pub roles: usize,
    /// Permissions in the catalog.
    pub permissions: usize,
}

/// Load the tenancy snapshot for the session's scope.
///
/// Walks the hierarchy downward from the session's tenant: the
/// organizations of a headquarters scope, their departments, and every
/// department's roles, plus the permission catalog. Role fetches for
/// sibling departments run concurrently.
pub async fn sync(client: &ApiClient, directory: &TenancyDirectory) -> AppResult<SyncSummary> {
    let session = client.session();
    let scope = session
        .principal()
        .map(|p| p.tenant)
        .or_else(|| session.tenant().map(|t| t.to_ref()))
        .ok_or_else(|| AppError::session("No tenant scope in session; sign in first"))?;

    let mut summary = SyncSummary::default();

    let organization_ids: Vec<OrganizationId> = match scope {
        TenantRef::Headquarters(headquarters_id) => {
            let organizations = fetch_organizations(client, directory, headquarters_id).await?;
            summary.organizations = organizations.len();
            organizations.iter().map(|o| o.id).collect()
        }
        TenantRef::Organization(organization_id) => vec![organization_id],
    };

    let department_lists = try_join_all(
        organization_ids
            .iter()
            .map(|&organization_id| fetch_departments(client, directory, organization_id)),
    )
    .await?;
    let department_ids: Vec<DepartmentId> = department_lists
        .iter()
        .flatten()
        .map(|department| department.id)
        .collect();
    summary.departments = department_ids.len();

    let role_lists = try_join_all(
        department_ids
            .iter()
            .map(|&department_id| fetch_roles(client, directory, department_id)),
    )
    .await?;
    summary.roles = role_lists.iter().map(Vec::len).sum();

    summary.permissions = fetch_permissions(client, directory).await?.len();

    info!(
        organizations = summary.organizations,
        departments = summary.departments,
        roles = summary.roles,
        permissions = summary.permissions,
        "Tenancy snapshot loaded"
    );
    Ok(summary)
}

/// Request payload for creating a role.
#[derive(Debug, Clone, Serialize)]
pub struct NewRole {
    /// The department the role will belong to.
    pub department_id: DepartmentId,
    /// Display name.
    pub name: String,
    /// Permissions to attach.
    pub permission_ids: Vec<PermissionId>,
}

/// Create a role and merge the created record into the directory.
///
/// The server's response embeds the attached permissions, so the new
/// role is checkable immediately, without a reload.
pub async fn create_role(
    client: &ApiClient,
    directory: &TenancyDirectory,
    new_role: &NewRole,
) -> AppResult<Role> {
    let role: Role = client.post_json("/roles", new_role).await?;
    directory.merge_role(role.clone());
    info!(role = %role.name, "Role created");
    Ok(role)
}

/// Request payload for creating a permission.
#[derive(Debug, Clone, Serialize)]
pub struct NewPermission {
    /// The capability name.
    pub name: String,
}

/// Create a permission and merge it into the directory.
pub async fn create_permission(
    client: &ApiClient,
    directory: &TenancyDirectory,
    new_permission: &NewPermission,
) -> AppResult<Permission> {
    let permission: Permission = client.post_json("/permissions", new_permission).await?;
    directory.merge_permission(permission.clone());
    info!(permission = %permission.name, "Permission created");
    Ok(permission)
}
