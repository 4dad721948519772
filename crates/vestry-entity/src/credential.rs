//! Credential value types.

use serde::{Deserialize, Serialize};

use crate::tenant::TenantRef;

/// An opaque bearer token issued by the server on sign-in.
///
/// The token value is treated as an opaque string: the client never
/// inspects, decodes or validates it locally. `Debug` and `Display`
/// are redacted so tokens cannot leak into logs; the raw value is
/// only reachable through [`BearerToken::expose`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the raw token value, e.g. to build an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl std::fmt::Display for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

/// The principal-identity credential held while a user is signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalCredential {
    /// The bearer token attached to principal-identity requests.
    pub token: BearerToken,
    /// The tenant the token was minted for.
    pub tenant: TenantRef,
}
