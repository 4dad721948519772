//! Integration tests for tenancy fetch, merge, and runtime creation.

use crate::helpers::{self, TestApp};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use vestry_client::api::tenancy::{self, NewPermission, NewRole};
use vestry_entity::department::DepartmentCategory;
use vestry_entity::tenant::TenantRef;

#[tokio::test]
async fn test_sync_walks_headquarters_scope() {
    let app = TestApp::new().await;

    let hq = helpers::sample_headquarters("Central");
    let org_a = helpers::sample_organization("Alpha Branch", Some(hq.id));
    let org_b = helpers::sample_organization("Beta Branch", Some(hq.id));
    let dept = helpers::sample_department(org_a.id, "Administration", DepartmentCategory::Corporate);
    let role_admin = helpers::sample_role(dept.id, "Branch Admin", &["Manage Roles"]);
    let role_usher = helpers::sample_role(dept.id, "Usher", &[]);

    let user = helpers::sample_user(TenantRef::Headquarters(hq.id), Some(role_admin.id));
    app.sign_in(&user, "tok-live");

    app.mount_list(
        &format!("/headquarters/{}/organizations", hq.id),
        json!([org_a, org_b]),
    )
    .await;
    app.mount_list(
        &format!("/organizations/{}/departments", org_a.id),
        json!([dept]),
    )
    .await;
    app.mount_list(&format!("/organizations/{}/departments", org_b.id), json!([]))
        .await;
    app.mount_list(
        &format!("/departments/{}/roles", dept.id),
        json!([role_usher, role_admin]),
    )
    .await;
    app.mount_list("/permissions", json!([])).await;

    let summary = tenancy::sync(&app.client, &app.directory).await.unwrap();
    assert_eq!(summary.organizations, 2);
    assert_eq!(summary.departments, 1);
    assert_eq!(summary.roles, 2);

    // Lists come back ordered by name regardless of payload order.
    let roles = app.directory.roles_of(dept.id);
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Branch Admin", "Usher"]);

    let organizations = app.directory.organizations_of(hq.id);
    assert_eq!(organizations[0].name, "Alpha Branch");

    // Embedded permissions were registered by the role merge.
    assert!(app.directory.find_permission_id("Manage Roles").is_some());
}

#[tokio::test]
async fn test_sync_with_organization_scope_skips_org_listing() {
    let app = TestApp::new().await;

    let org = helpers::sample_organization("North Branch", None);
    let dept = helpers::sample_department(org.id, "Music", DepartmentCategory::Church);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    app.mount_list(&format!("/organizations/{}/departments", org.id), json!([dept]))
        .await;
    app.mount_list(&format!("/departments/{}/roles", dept.id), json!([]))
        .await;
    app.mount_list("/permissions", json!([])).await;

    let summary = tenancy::sync(&app.client, &app.directory).await.unwrap();
    assert_eq!(summary.organizations, 0);
    assert_eq!(summary.departments, 1);
    assert_eq!(summary.roles, 0);
}

#[tokio::test]
async fn test_non_array_role_payload_yields_empty_not_error() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let dept = helpers::sample_department(org.id, "Music", DepartmentCategory::Church);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    app.mount_list(
        &format!("/departments/{}/roles", dept.id),
        json!({"error": "unexpected shape"}),
    )
    .await;

    let roles = tenancy::fetch_roles(&app.client, &app.directory, dept.id)
        .await
        .unwrap();
    assert!(roles.is_empty());
    assert!(app.directory.roles_of(dept.id).is_empty());
}

#[tokio::test]
async fn test_created_role_is_visible_without_reload() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let dept = helpers::sample_department(org.id, "Music", DepartmentCategory::Church);
    let created = helpers::sample_role(dept.id, "Choir Lead", &["Manage Song Sheets"]);
    let user = helpers::sample_user(TenantRef::Organization(org.id), Some(created.id));
    app.sign_in(&user, "tok-live");

    Mock::given(method("POST"))
        .and(path("/roles"))
        .and(body_partial_json(json!({"name": "Choir Lead"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .expect(1)
        .mount(&app.server)
        .await;

    let role = tenancy::create_role(
        &app.client,
        &app.directory,
        &NewRole {
            department_id: dept.id,
            name: "Choir Lead".to_string(),
            permission_ids: created.permissions.iter().map(|p| p.id).collect(),
        },
    )
    .await
    .unwrap();

    // No reload: the merged record answers lookups and checks at once.
    assert_eq!(app.directory.role(role.id).map(|r| r.name), Some("Choir Lead".to_string()));
    assert!(app.directory.role_grants(role.id, "Manage Song Sheets"));
    assert!(app.directory.find_permission_id("Manage Song Sheets").is_some());
}

#[tokio::test]
async fn test_created_permission_is_indexed_immediately() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    let id = uuid::Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/permissions"))
        .and(body_partial_json(json!({"name": "Approve Budgets"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": id, "name": "Approve Budgets"})),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let permission = tenancy::create_permission(
        &app.client,
        &app.directory,
        &NewPermission {
            name: "Approve Budgets".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        app.directory.find_permission_id("Approve Budgets"),
        Some(permission.id)
    );
}

#[tokio::test]
async fn test_fetch_headquarters_merges_single_record() {
    let app = TestApp::new().await;
    let hq = helpers::sample_headquarters("Central");
    let user = helpers::sample_user(TenantRef::Headquarters(hq.id), None);
    app.sign_in(&user, "tok-live");

    app.mount_list(&format!("/headquarters/{}", hq.id), json!(&hq)).await;

    let fetched = tenancy::fetch_headquarters(&app.client, &app.directory, hq.id)
        .await
        .unwrap();
    assert_eq!(fetched.name, "Central");
    assert_eq!(app.directory.headquarters(hq.id).map(|h| h.name), Some("Central".to_string()));
}
