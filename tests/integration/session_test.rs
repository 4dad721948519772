//! Integration tests for session persistence across process lifetimes.

use crate::helpers::{self, TestApp};

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use vestry_auth::session::{FileSessionStore, SessionContext};
use vestry_client::api;
use vestry_entity::tenant::{Tenant, TenantRef};

#[tokio::test]
async fn test_login_persists_session_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let store = Arc::new(FileSessionStore::new(&session_path));
    let app = TestApp::with_store(store.clone()).await;

    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.mount_login("tok-issued", &user).await;

    let signed_in = api::auth::login(&app.client, "jdoe", "hunter2").await.unwrap();
    assert_eq!(signed_in.username, user.username);

    // The persisted document carries the stable keys.
    let raw = std::fs::read_to_string(&session_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("principal_credential").is_some());
    assert!(value.get("principal").is_some());

    app.session
        .set_tenant_session(Tenant::Organization(org))
        .unwrap();
    let raw = std::fs::read_to_string(&session_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("tenant").is_some());

    // A fresh context over the same store picks the session up.
    let rehydrated = SessionContext::new(store).unwrap();
    assert!(rehydrated.is_authenticated());
    assert_eq!(rehydrated.principal().map(|p| p.id), Some(user.id));
}

#[tokio::test]
async fn test_logout_clears_disk_directory_and_memory() {
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let store = Arc::new(FileSessionStore::new(&session_path));
    let app = TestApp::with_store(store).await;

    let org = helpers::sample_organization("North Branch", None);
    let department = helpers::sample_department(
        org.id,
        "Administration",
        vestry_entity::department::DepartmentCategory::Corporate,
    );
    let role = helpers::sample_role(department.id, "Branch Admin", &["Manage Roles"]);
    let user = helpers::sample_user(TenantRef::Organization(org.id), Some(role.id));
    app.sign_in(&user, "tok-live");
    app.directory.merge_role(role.clone());
    assert!(session_path.exists());

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&app.server)
        .await;

    api::auth::logout(&app.client, &app.directory).await.unwrap();

    assert!(!app.session.is_authenticated());
    assert!(!session_path.exists());
    assert!(app.directory.role(role.id).is_none());
}

#[tokio::test]
async fn test_logout_succeeds_locally_when_server_fails() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&app.server)
        .await;

    api::auth::logout(&app.client, &app.directory).await.unwrap();
    assert!(!app.session.is_authenticated());
    assert!(app.session.principal().is_none());
}

#[tokio::test]
async fn test_bad_credentials_leave_session_untouched() {
    let app = TestApp::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let err = api::auth::login(&app.client, "jdoe", "wrong").await.unwrap_err();
    assert!(err.is_login_required());
    assert!(!app.session.is_authenticated());
}
