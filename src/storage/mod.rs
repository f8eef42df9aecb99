//! Key-value storage areas.
//!
//! The page keeps its state in two string-keyed, string-valued areas:
//! a session area that holds the cart and a persistent area that holds
//! submitted orders. Both are reached through [`KeyValueStore`] and wrapped
//! in [`SessionStore`] / [`PersistentStore`] so the scope of every read and
//! write is visible in the type.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{StorageConfig, StorageType};

pub mod helpers;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use helpers::{parse_or_default, to_json};
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Session key holding the serialized cart.
pub const CART_KEY: &str = "abc_cart";
/// Persistent key holding the append-only order log.
pub const ORDERS_KEY: &str = "abc_custom_orders";
/// Persistent key holding the most recent order.
pub const LAST_ORDER_KEY: &str = "abc_last_order";

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Interface for a string-keyed, string-valued storage area.
///
/// Implementations:
/// - `MemoryStore`: process memory, used for the session area
/// - `SqliteStore`: SQLite table, used for the persistent area
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Generates a scope-typed handle over a shared [`KeyValueStore`].
///
/// Both areas have the same surface; only the type differs, so a cart can
/// never be written to the persistent area by accident.
macro_rules! scoped_store {
    ($(#[$meta:meta])* $name:ident, $scope:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: Arc<dyn KeyValueStore>,
        }

        impl $name {
            pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
                Self { inner }
            }

            /// Name of the storage area, used in log fields.
            pub fn scope(&self) -> &'static str {
                $scope
            }

            pub async fn get(&self, key: &str) -> Result<Option<String>> {
                self.inner.get(key).await
            }

            pub async fn set(&self, key: &str, value: &str) -> Result<()> {
                self.inner.set(key, value).await
            }

            pub async fn remove(&self, key: &str) -> Result<()> {
                self.inner.remove(key).await
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

scoped_store!(
    /// Storage area scoped to one browsing session. Holds the cart.
    SessionStore,
    "session"
);

scoped_store!(
    /// Storage area scoped to the origin, kept across sessions. Holds orders.
    PersistentStore,
    "persistent"
);

/// Initialize storage based on configuration.
///
/// The session area is always in-memory. The persistent area follows
/// `config.storage_type`.
pub async fn init_storage(
    config: &StorageConfig,
) -> std::result::Result<(SessionStore, PersistentStore), Box<dyn std::error::Error>> {
    info!(storage_type = %config.storage_type, path = %config.path, "Initializing storage");

    let session = SessionStore::new(Arc::new(MemoryStore::new()));

    let persistent: Arc<dyn KeyValueStore> = match config.storage_type {
        StorageType::Memory => Arc::new(MemoryStore::new()),
        #[cfg(feature = "sqlite")]
        StorageType::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.path).parent() {
                std::fs::create_dir_all(parent)?;
            }

            let pool =
                sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.path)).await?;

            let store = SqliteStore::new(pool, "persistent");
            store.init().await?;
            Arc::new(store)
        }
        #[cfg(not(feature = "sqlite"))]
        StorageType::Sqlite => {
            tracing::error!("SQLite storage requested but 'sqlite' feature is not enabled");
            return Err("SQLite feature not enabled".into());
        }
    };

    Ok((session, PersistentStore::new(persistent)))
}
