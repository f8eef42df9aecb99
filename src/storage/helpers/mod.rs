//! Shared storage helper functions.
//!
//! JSON encoding for values kept in the key-value areas. Reads are
//! fail-soft: a value that cannot be decoded is replaced by a fallback.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Result;

/// Decode `raw` as JSON, returning `fallback` when it is absent or malformed.
///
/// Pure: no logging, no storage access.
pub fn parse_or_default<T: DeserializeOwned>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or(fallback)
}

/// Encode a value as compact JSON for storage.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
