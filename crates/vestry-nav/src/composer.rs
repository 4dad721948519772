//! Composition of visible navigation from declared entries.

use vestry_auth::resolver::PermissionResolver;

use crate::entry::NavEntry;

/// A visible navigation entry, with its active flag resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// The declared entry.
    pub entry: NavEntry,
    /// Whether the entry matches the current location.
    pub active: bool,
}

/// Filters declared entries down to what the current principal may see.
#[derive(Debug, Clone)]
pub struct NavComposer {
    resolver: PermissionResolver,
}

impl NavComposer {
    /// Create a composer over the given resolver.
    pub fn new(resolver: PermissionResolver) -> Self {
        Self { resolver }
    }

    /// Produce the visible subset of `entries`, in input order.
    ///
    /// An entry survives iff the principal holds its required
    /// permission; the sign-out entry therefore always survives. An
    /// item is active when its destination equals `current_location`
    /// exactly; every matching entry is marked, not just the first.
    pub fn compose(&self, entries: &[NavEntry], current_location: &str) -> Vec<NavItem> {
        entries
            .iter()
            .filter(|entry| self.resolver.has_permission(&entry.required_permission))
            .map(|entry| NavItem {
                entry: entry.clone(),
                active: entry.destination == current_location,
            })
            .collect()
    }
}
