//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vestry_auth::directory::TenancyDirectory;
use vestry_auth::session::{SessionContext, SessionStore};
use vestry_client::ApiClient;
use vestry_core::config::api::ApiConfig;
use vestry_core::types::{
    DepartmentId, HeadquartersId, OrganizationId, PermissionId, RoleId, UserId,
};
use vestry_entity::credential::{BearerToken, PrincipalCredential};
use vestry_entity::department::{Department, DepartmentCategory};
use vestry_entity::headquarters::Headquarters;
use vestry_entity::organization::Organization;
use vestry_entity::permission::Permission;
use vestry_entity::role::Role;
use vestry_entity::tenant::TenantRef;
use vestry_entity::user::{User, UserStatus};

/// Test application context: a mocked backend plus fully wired client state.
pub struct TestApp {
    /// The mocked backend API.
    pub server: MockServer,
    /// The session under test.
    pub session: SessionContext,
    /// The tenancy snapshot under test.
    pub directory: Arc<TenancyDirectory>,
    /// Client pointed at the mock server.
    pub client: ApiClient,
}

impl TestApp {
    /// Create a test application with an ephemeral session.
    pub async fn new() -> Self {
        let session = SessionContext::ephemeral();
        Self::with_session(session).await
    }

    /// Create a test application over a specific session store.
    pub async fn with_store(store: Arc<dyn SessionStore>) -> Self {
        let session = SessionContext::new(store).expect("session should hydrate");
        Self::with_session(session).await
    }

    async fn with_session(session: SessionContext) -> Self {
        let server = MockServer::start().await;
        let config = ApiConfig {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        let client = ApiClient::new(&config, session.clone()).expect("client should build");
        let directory = Arc::new(TenancyDirectory::new());

        Self {
            server,
            session,
            directory,
            client,
        }
    }

    /// Put a signed-in principal directly into the session.
    pub fn sign_in(&self, user: &User, token: &str) {
        self.session
            .set_principal_session(
                PrincipalCredential {
                    token: BearerToken::new(token),
                    tenant: user.tenant,
                },
                user.clone(),
            )
            .expect("session write should succeed");
    }

    /// Mount a successful login response for the given user.
    pub async fn mount_login(&self, token: &str, user: &User) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": token,
                "user": user,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a JSON response at the given GET path.
    pub async fn mount_list(&self, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

// -- Entity fixtures --

pub fn sample_headquarters(name: &str) -> Headquarters {
    Headquarters {
        id: HeadquartersId::new(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

pub fn sample_organization(name: &str, headquarters_id: Option<HeadquartersId>) -> Organization {
    Organization {
        id: OrganizationId::new(),
        headquarters_id,
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

pub fn sample_department(
    organization_id: OrganizationId,
    name: &str,
    category: DepartmentCategory,
) -> Department {
    Department {
        id: DepartmentId::new(),
        organization_id,
        name: name.to_string(),
        category,
    }
}

pub fn sample_role(department_id: DepartmentId, name: &str, permission_names: &[&str]) -> Role {
    Role {
        id: RoleId::new(),
        department_id,
        name: name.to_string(),
        permissions: permission_names
            .iter()
            .map(|name| Permission {
                id: PermissionId::new(),
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn sample_user(tenant: TenantRef, role_id: Option<RoleId>) -> User {
    User {
        id: UserId::new(),
        username: "jdoe".to_string(),
        display_name: "J. Doe".to_string(),
        email: Some("jdoe@example.com".to_string()),
        tenant,
        role_id,
        status: if role_id.is_some() {
            UserStatus::Active
        } else {
            UserStatus::Pending
        },
        created_at: Utc::now(),
    }
}
