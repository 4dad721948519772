//! Sign-in and sign-out flows.

use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use vestry_auth::directory::TenancyDirectory;
use vestry_core::result::AppResult;
use vestry_entity::credential::{BearerToken, PrincipalCredential};
use vestry_entity::user::User;

use crate::client::{ApiClient, RequestSpec};

/// Wire shape of a successful sign-in response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// Sign a principal in and populate the session.
///
/// Sends the credentials without any identity attached (there is none
/// yet), then stores the returned token and principal. The token is
/// kept opaque; a `401` here means the credentials were rejected.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> AppResult<User> {
    let spec = RequestSpec::post(
        "/auth/login",
        json!({ "username": username, "password": password }),
    );
    let value = client.execute_unauthenticated(&spec).await?;
    let response: LoginResponse = serde_json::from_value(value)?;

    let credential = PrincipalCredential {
        token: BearerToken::new(response.token),
        tenant: response.user.tenant,
    };
    client
        .session()
        .set_principal_session(credential, response.user.clone())?;

    info!(username = %response.user.username, "Signed in");
    Ok(response.user)
}

/// Sign the current principal out.
///
/// The server notification is best-effort: local session and directory
/// state is cleared even when it fails, so sign-out always succeeds
/// from the caller's point of view.
pub async fn logout(client: &ApiClient, directory: &TenancyDirectory) -> AppResult<()> {
    let spec = RequestSpec::post("/auth/logout", json!({}));
    if let Err(e) = client.execute(&spec).await {
        warn!(error = %e, "Server sign-out failed; clearing local session anyway");
    }

    client.session().clear()?;
    directory.clear();
    info!("Signed out");
    Ok(())
}
