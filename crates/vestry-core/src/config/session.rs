//! Persisted session store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the on-disk session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStoreConfig {
    /// Path to the session file, relative to the working directory unless
    /// absolute.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    ".vestry/session.json".to_string()
}
