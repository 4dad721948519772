//! Tolerant ingestion of list payloads.
//!
//! List endpoints return JSON arrays. Backends have been observed to
//! return objects or nulls on partial failures, so a non-array body is
//! treated as an empty result rather than an error, and elements that
//! fail to deserialize are skipped. Both cases are logged.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Parse a JSON value expected to be an array of `T`.
///
/// `what` names the payload in log output, e.g. `"roles"`.
pub fn parse_array<T: DeserializeOwned>(value: Value, what: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        warn!(what, "Expected a JSON array; treating payload as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(what, error = %e, "Skipping element that failed to deserialize");
                None
            }
        })
        .collect()
}
