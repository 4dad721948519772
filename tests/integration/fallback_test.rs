//! Integration tests for the dual-strategy fallback contract as observed
//! on the wire.

use crate::helpers::{self, TestApp};

use serde_json::json;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vestry_client::api;
use vestry_core::error::ErrorKind;
use vestry_entity::tenant::{Tenant, TenantRef};

#[tokio::test]
async fn test_principal_identity_sends_bearer_token() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    let permission = json!({"id": uuid::Uuid::new_v4(), "name": "Manage Roles"});
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .and(bearer_token("tok-live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([permission])))
        .expect(1)
        .mount(&app.server)
        .await;

    let permissions = api::tenancy::fetch_permissions(&app.client, &app.directory)
        .await
        .unwrap();
    assert_eq!(permissions.len(), 1);
    assert!(app.directory.find_permission_id("Manage Roles").is_some());
}

#[tokio::test]
async fn test_tenant_fallback_carries_organization_id_and_cached_token() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");
    app.session
        .set_tenant_session(Tenant::Organization(org.clone()))
        .unwrap();

    // First attempt fails server-side; the fallback must carry the tenant
    // scope and still attach the cached bearer token.
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .and(query_param("organization_id", org.id.to_string()))
        .and(bearer_token("tok-live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let permissions = api::tenancy::fetch_permissions(&app.client, &app.directory)
        .await
        .unwrap();
    assert!(permissions.is_empty());
}

#[tokio::test]
async fn test_tenant_identity_without_credential_uses_scope_only() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    app.session
        .set_tenant_session(Tenant::Organization(org.clone()))
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/permissions"))
        .and(query_param("organization_id", org.id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    // No principal credential: the principal attempt fails without any
    // HTTP request, so the mock sees exactly one call.
    api::tenancy::fetch_permissions(&app.client, &app.directory)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_both_failures_surface_the_tenant_attempt_error() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-live");

    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("principal boom"))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("tenant boom"))
        .expect(1)
        .mount(&app.server)
        .await;

    let err = api::tenancy::fetch_permissions(&app.client, &app.directory)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Api);
    assert!(err.message.contains("502"), "surfaced: {err}");
    assert!(err.message.contains("tenant boom"), "surfaced: {err}");
}

#[tokio::test]
async fn test_rejected_credential_surfaces_login_required_without_loops() {
    let app = TestApp::new().await;
    let org = helpers::sample_organization("North Branch", None);
    let user = helpers::sample_user(TenantRef::Organization(org.id), None);
    app.sign_in(&user, "tok-expired");

    // One principal attempt plus one fallback attempt, nothing more.
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&app.server)
        .await;

    let err = api::tenancy::fetch_permissions(&app.client, &app.directory)
        .await
        .unwrap_err();
    assert!(err.is_login_required());
}

#[tokio::test]
async fn test_server_unreachable_maps_to_network_error() {
    // A builder-created server is not drawn from wiremock's shared pool,
    // so dropping it actually releases the port.
    let server = MockServer::builder().start().await;
    let base_url = server.uri();
    drop(server);

    let session = vestry_auth::session::SessionContext::ephemeral();
    let config = vestry_core::config::api::ApiConfig {
        base_url,
        timeout_seconds: 1,
    };
    let client = vestry_client::ApiClient::new(&config, session).unwrap();
    let directory = vestry_auth::directory::TenancyDirectory::new();

    let err = api::tenancy::fetch_permissions(&client, &directory)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
}
