//! The dual-strategy request client.
//!
//! Every authenticated call site goes through [`ApiClient::execute`] so
//! the principal→tenant fallback order is implemented exactly once.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use vestry_auth::session::{SessionContext, SessionSnapshot};
use vestry_core::config::api::ApiConfig;
use vestry_core::error::AppError;
use vestry_core::result::AppResult;

use crate::strategy::IdentityStrategy;

/// Maximum number of response-body characters quoted in error messages.
const ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// A logical request, described independently of identity strategy.
///
/// The client rebuilds the actual HTTP request from this description for
/// each attempt, so both strategies send the same method, path and body.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    body: Option<Value>,
}

impl RequestSpec {
    /// Describe a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// Describe a POST request with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    /// The request path, for diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Authenticated HTTP client for the Vestry backend.
///
/// Cheap to clone; clones share the connection pool and session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// The session requests draw their identity from.
    session: SessionContext,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig, session: SessionContext) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client reads identity from.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a logical request under the fallback contract.
    ///
    /// The session is snapshotted once, at dispatch; both attempts use
    /// that snapshot, so a concurrent session clear cannot change an
    /// in-flight request. The sequence is fixed:
    ///
    /// 1. attempt under [`IdentityStrategy::Principal`];
    /// 2. on any failure (missing credential, transport error, non-2xx),
    ///    log it and attempt once under [`IdentityStrategy::Tenant`]
    ///    with the same snapshot;
    /// 3. if both fail, surface the second failure, unless a `401` was
    ///    observed on either attempt, in which case `LoginRequired` is
    ///    surfaced so the caller redirects to sign-in instead of
    ///    retrying.
    ///
    /// A logical request is attempted at least once and at most twice;
    /// no strategy is ever retried against itself.
    pub async fn execute(&self, spec: &RequestSpec) -> AppResult<Value> {
        let snapshot = self.session.snapshot();

        let first_error = match self
            .send(spec, IdentityStrategy::Principal, &snapshot)
            .await
        {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };
        debug!(
            path = %spec.path,
            error = %first_error,
            "Principal attempt failed; falling back to tenant identity"
        );

        match self.send(spec, IdentityStrategy::Tenant, &snapshot).await {
            Ok(value) => Ok(value),
            Err(second_error) => {
                if !second_error.is_login_required() && first_error.is_login_required() {
                    Err(first_error)
                } else {
                    Err(second_error)
                }
            }
        }
    }

    /// Issue a request with no identity attached, e.g. sign-in itself.
    pub async fn execute_unauthenticated(&self, spec: &RequestSpec) -> AppResult<Value> {
        let mut request = self.http.request(spec.method.clone(), self.url(&spec.path));
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Self::read_json(response).await
    }

    /// Fetch a resource under the fallback contract and deserialize it.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let value = self.execute(&RequestSpec::get(path)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a JSON body under the fallback contract and deserialize the
    /// response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> AppResult<T> {
        let spec = RequestSpec::post(path, serde_json::to_value(body)?);
        let value = self.execute(&spec).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Perform one attempt under one strategy.
    async fn send(
        &self,
        spec: &RequestSpec,
        strategy: IdentityStrategy,
        snapshot: &SessionSnapshot,
    ) -> AppResult<Value> {
        let mut request = self.http.request(spec.method.clone(), self.url(&spec.path));

        match strategy {
            IdentityStrategy::Principal => {
                let credential = snapshot.credential.as_ref().ok_or_else(|| {
                    AppError::unauthenticated("No principal credential in session")
                })?;
                request = request.bearer_auth(credential.token.expose());
            }
            IdentityStrategy::Tenant => {
                if let Some(scope) = snapshot.tenant_scope {
                    request = request.query(&[("organization_id", scope.to_string())]);
                }
                // A cached bearer token rides along when present; its
                // absence is not a failure under this strategy.
                if let Some(credential) = &snapshot.credential {
                    request = request.bearer_auth(credential.token.expose());
                }
            }
        }

        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::read_json(response).await
    }

    /// Map a response to parsed JSON or the unified error taxonomy.
    ///
    /// Response handling is identical under both strategies; only
    /// request construction differs.
    async fn read_json(response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::login_required(
                "Server rejected the credential (401)",
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_SNIPPET_CHARS).collect();
            return Err(AppError::api(format!("HTTP {status}: {snippet}")));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::serialization(format!("Invalid JSON in response body: {e}")))
    }
}
