//! Test utilities and mock implementations.
//!
//! Store doubles and fixtures for exercising the cart and order logic
//! without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cart::CartItem;
use crate::storage::{
    KeyValueStore, MemoryStore, PersistentStore, Result, SessionStore, StorageError,
};

/// Store whose reads and writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_on_get: RwLock<bool>,
    fail_on_set: RwLock<bool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_on_get(&self, fail: bool) {
        *self.fail_on_get.write().await = fail;
    }

    pub async fn set_fail_on_set(&self, fail: bool) {
        *self.fail_on_set.write().await = fail;
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if *self.fail_on_get.read().await {
            return Err(StorageError::Unavailable(format!("get {}", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.fail_on_set.read().await {
            return Err(StorageError::Unavailable(format!("set {}", key)));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}

/// Session area over a fresh memory store; the store is returned for
/// direct inspection.
pub fn session_store() -> (Arc<MemoryStore>, SessionStore) {
    let raw = Arc::new(MemoryStore::new());
    (raw.clone(), SessionStore::new(raw))
}

/// Persistent area over a fresh memory store.
pub fn persistent_store() -> (Arc<MemoryStore>, PersistentStore) {
    let raw = Arc::new(MemoryStore::new());
    (raw.clone(), PersistentStore::new(raw))
}

/// Build a cart item with an explicit quantity.
pub fn make_item(id: &str, name: &str, price: f64, qty: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        qty,
    }
}
