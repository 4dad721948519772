//! Local snapshot of the tenancy hierarchy.

pub mod ingest;

use std::collections::HashSet;

use dashmap::DashMap;

use vestry_core::types::{DepartmentId, HeadquartersId, OrganizationId, PermissionId, RoleId};
use vestry_entity::department::Department;
use vestry_entity::headquarters::Headquarters;
use vestry_entity::organization::Organization;
use vestry_entity::permission::Permission;
use vestry_entity::role::Role;

/// Concurrent snapshot of headquarters, organizations, departments, roles
/// and permissions for one session.
///
/// The directory is read-mostly: fetch flows merge records in, every
/// render reads. Lookups that miss return `None` or an empty collection,
/// never an error; absent tenancy data means "no capability yet", and
/// the resolver fails closed on it.
///
/// The directory invents no defaults. A role with zero permissions stays
/// a valid role that fails every permission check.
#[derive(Debug, Default)]
pub struct TenancyDirectory {
    headquarters: DashMap<HeadquartersId, Headquarters>,
    organizations: DashMap<OrganizationId, Organization>,
    departments: DashMap<DepartmentId, Department>,
    roles: DashMap<RoleId, Role>,
    permissions: DashMap<PermissionId, Permission>,
    /// Exact-name index over `permissions`.
    permission_ids_by_name: DashMap<String, PermissionId>,
}

impl TenancyDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Point lookups --

    /// Look up a headquarters by id.
    pub fn headquarters(&self, id: HeadquartersId) -> Option<Headquarters> {
        self.headquarters.get(&id).map(|e| e.value().clone())
    }

    /// Look up an organization by id.
    pub fn organization(&self, id: OrganizationId) -> Option<Organization> {
        self.organizations.get(&id).map(|e| e.value().clone())
    }

    /// Look up a department by id.
    pub fn department(&self, id: DepartmentId) -> Option<Department> {
        self.departments.get(&id).map(|e| e.value().clone())
    }

    /// Look up a role by id.
    pub fn role(&self, id: RoleId) -> Option<Role> {
        self.roles.get(&id).map(|e| e.value().clone())
    }

    /// Look up a permission by id.
    pub fn permission(&self, id: PermissionId) -> Option<Permission> {
        self.permissions.get(&id).map(|e| e.value().clone())
    }

    /// Resolve a permission name to its id.
    ///
    /// Matching is exact and case-sensitive; unknown names return `None`.
    pub fn find_permission_id(&self, name: &str) -> Option<PermissionId> {
        self.permission_ids_by_name.get(name).map(|e| *e.value())
    }

    // -- Relationship queries --

    /// The organizations belonging to a headquarters, ordered by name
    /// (ties broken by id) for stable listings.
    pub fn organizations_of(&self, headquarters_id: HeadquartersId) -> Vec<Organization> {
        let mut organizations: Vec<Organization> = self
            .organizations
            .iter()
            .filter(|e| e.value().headquarters_id == Some(headquarters_id))
            .map(|e| e.value().clone())
            .collect();
        organizations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        organizations
    }

    /// The roles belonging to a department, ordered by name (ties broken
    /// by id).
    ///
    /// An unknown department yields an empty list.
    pub fn roles_of(&self, department_id: DepartmentId) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .roles
            .iter()
            .filter(|e| e.value().department_id == department_id)
            .map(|e| e.value().clone())
            .collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        roles
    }

    /// The permission names attached to a role.
    ///
    /// An unknown role yields an empty set.
    pub fn permissions_of(&self, role_id: RoleId) -> HashSet<String> {
        self.roles
            .get(&role_id)
            .map(|role| role.permissions.iter().map(|p| p.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Check whether a role carries a permission name, without cloning
    /// the permission set.
    ///
    /// Unknown roles grant nothing.
    pub fn role_grants(&self, role_id: RoleId, permission_name: &str) -> bool {
        self.roles
            .get(&role_id)
            .map(|role| role.grants(permission_name))
            .unwrap_or(false)
    }

    // -- Merges --

    /// Upsert a headquarters record.
    pub fn merge_headquarters(&self, headquarters: Headquarters) {
        self.headquarters.insert(headquarters.id, headquarters);
    }

    /// Upsert an organization record.
    pub fn merge_organization(&self, organization: Organization) {
        self.organizations.insert(organization.id, organization);
    }

    /// Upsert a batch of organization records.
    pub fn merge_organizations(&self, organizations: impl IntoIterator<Item = Organization>) {
        for organization in organizations {
            self.merge_organization(organization);
        }
    }

    /// Upsert a department record.
    pub fn merge_department(&self, department: Department) {
        self.departments.insert(department.id, department);
    }

    /// Upsert a batch of department records.
    pub fn merge_departments(&self, departments: impl IntoIterator<Item = Department>) {
        for department in departments {
            self.merge_department(department);
        }
    }

    /// Upsert a role record, registering its embedded permissions.
    ///
    /// Runtime-created roles become visible to permission checks without
    /// a full reload.
    pub fn merge_role(&self, role: Role) {
        for permission in &role.permissions {
            self.merge_permission(permission.clone());
        }
        self.roles.insert(role.id, role);
    }

    /// Upsert a batch of role records.
    pub fn merge_roles(&self, roles: impl IntoIterator<Item = Role>) {
        for role in roles {
            self.merge_role(role);
        }
    }

    /// Upsert a permission record, keeping the name index in step.
    pub fn merge_permission(&self, permission: Permission) {
        let id = permission.id;
        let name = permission.name.clone();
        if let Some(previous) = self.permissions.insert(id, permission) {
            if previous.name != name {
                self.permission_ids_by_name.remove(&previous.name);
            }
        }
        self.permission_ids_by_name.insert(name, id);
    }

    /// Upsert a batch of permission records.
    pub fn merge_permissions(&self, permissions: impl IntoIterator<Item = Permission>) {
        for permission in permissions {
            self.merge_permission(permission);
        }
    }

    /// Drop the entire snapshot.
    pub fn clear(&self) {
        self.headquarters.clear();
        self.organizations.clear();
        self.departments.clear();
        self.roles.clear();
        self.permissions.clear();
        self.permission_ids_by_name.clear();
    }
}
