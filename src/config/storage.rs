//! Storage configuration types.

use serde::Deserialize;

/// Backend for the persistent storage area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// Kept in process memory; lost when the process exits.
    Memory,
    /// SQLite database file at `path`.
    #[default]
    Sqlite,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::Memory => write!(f, "memory"),
            StorageType::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Storage configuration.
///
/// Applies to the persistent area only; the session area is always
/// in-memory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage type discriminator.
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    /// Path to database file (sqlite only).
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::Sqlite,
            path: "./data/abc_studio.db".to_string(),
        }
    }
}
