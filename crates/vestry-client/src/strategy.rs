//! Identity strategies for authenticated requests.

/// The identity a single HTTP attempt is issued under.
///
/// Two disjoint sign-in paths populate the session differently: one
/// stores a principal credential, the other only caches an organization
/// record. Every read path must work under either, so the client
/// attempts [`Principal`](Self::Principal) first and falls back to
/// [`Tenant`](Self::Tenant) once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityStrategy {
    /// Attach the principal credential as a bearer token. Fails
    /// immediately when no credential is in the snapshot.
    Principal,
    /// Scope the request by tenant identifier. Never fails fast: with
    /// nothing cached the request goes out bare and the server may
    /// infer the tenant from ambient state.
    Tenant,
}

impl IdentityStrategy {
    /// Return the strategy as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Tenant => "tenant",
        }
    }
}

impl std::fmt::Display for IdentityStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
