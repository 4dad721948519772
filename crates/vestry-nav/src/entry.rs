//! Declarative navigation entries.

use serde::{Deserialize, Serialize};

/// One declared navigation entry.
///
/// Menus are data: a list of entries can live in configuration or be
/// built in code, and the composer decides visibility per principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Text shown to the user.
    pub label: String,
    /// Where the entry leads, e.g. `"/dashboard"`.
    pub destination: String,
    /// The permission a principal must hold to see this entry.
    pub required_permission: String,
}

impl NavEntry {
    /// Build an entry.
    pub fn new(
        label: impl Into<String>,
        destination: impl Into<String>,
        required_permission: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
            required_permission: required_permission.into(),
        }
    }
}
