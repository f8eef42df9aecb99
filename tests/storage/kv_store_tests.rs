//! KeyValueStore interface tests.
//!
//! These tests verify the contract of the KeyValueStore trait.
//! Each storage implementation should run these tests.

use abc_studio::storage::KeyValueStore;

// =============================================================================
// KeyValueStore::get tests
// =============================================================================

pub async fn test_get_nonexistent<S: KeyValueStore>(store: &S) {
    let value = store
        .get("test_kv_nonexist")
        .await
        .expect("get should succeed");
    assert!(value.is_none(), "nonexistent key should be None");
}

pub async fn test_get_preserves_value<S: KeyValueStore>(store: &S) {
    let value = r#"[{"id":"mat","name":"Café Mat 6mm","price":24.99,"qty":2}]"#;

    store
        .set("test_kv_preserve", value)
        .await
        .expect("set should succeed");

    let stored = store
        .get("test_kv_preserve")
        .await
        .expect("get should succeed")
        .expect("value should exist");
    assert_eq!(stored, value);
}

// =============================================================================
// KeyValueStore::set tests
// =============================================================================

pub async fn test_set_overwrites<S: KeyValueStore>(store: &S) {
    let key = "test_kv_overwrite";

    store.set(key, "first").await.expect("first set should succeed");
    store
        .set(key, "second")
        .await
        .expect("second set should succeed");

    let stored = store.get(key).await.expect("get should succeed");
    assert_eq!(stored.as_deref(), Some("second"));
}

pub async fn test_set_empty_value<S: KeyValueStore>(store: &S) {
    let key = "test_kv_empty";

    store.set(key, "").await.expect("set should succeed");

    let stored = store.get(key).await.expect("get should succeed");
    assert_eq!(stored.as_deref(), Some(""), "empty value is not absence");
}

// =============================================================================
// KeyValueStore::remove tests
// =============================================================================

pub async fn test_remove_existing<S: KeyValueStore>(store: &S) {
    let key = "test_kv_remove";

    store.set(key, "value").await.expect("set should succeed");
    store.remove(key).await.expect("remove should succeed");

    let stored = store.get(key).await.expect("get should succeed");
    assert!(stored.is_none(), "removed key should be None");
}

pub async fn test_remove_nonexistent<S: KeyValueStore>(store: &S) {
    store
        .remove("test_kv_remove_nonexist")
        .await
        .expect("removing an absent key should succeed");
}

pub async fn test_remove_then_recreate<S: KeyValueStore>(store: &S) {
    let key = "test_kv_recreate";

    store.set(key, "old").await.expect("set should succeed");
    store.remove(key).await.expect("remove should succeed");
    store.set(key, "new").await.expect("set should succeed");

    let stored = store.get(key).await.expect("get should succeed");
    assert_eq!(stored.as_deref(), Some("new"));
}

// =============================================================================
// Isolation tests
// =============================================================================

pub async fn test_key_isolation<S: KeyValueStore>(store: &S) {
    store.set("test_kv_iso_a", "a").await.expect("set should succeed");
    store.set("test_kv_iso_b", "b").await.expect("set should succeed");
    store
        .remove("test_kv_iso_a")
        .await
        .expect("remove should succeed");

    let b = store.get("test_kv_iso_b").await.expect("get should succeed");
    assert_eq!(b.as_deref(), Some("b"), "removing one key must not affect another");
}

/// Run all KeyValueStore tests against a store.
#[macro_export]
macro_rules! run_kv_store_tests {
    ($store:expr) => {
        use $crate::storage::kv_store_tests::*;

        // get tests
        test_get_nonexistent($store).await;
        println!("  test_get_nonexistent: PASSED");

        test_get_preserves_value($store).await;
        println!("  test_get_preserves_value: PASSED");

        // set tests
        test_set_overwrites($store).await;
        println!("  test_set_overwrites: PASSED");

        test_set_empty_value($store).await;
        println!("  test_set_empty_value: PASSED");

        // remove tests
        test_remove_existing($store).await;
        println!("  test_remove_existing: PASSED");

        test_remove_nonexistent($store).await;
        println!("  test_remove_nonexistent: PASSED");

        test_remove_then_recreate($store).await;
        println!("  test_remove_then_recreate: PASSED");

        // isolation tests
        test_key_isolation($store).await;
        println!("  test_key_isolation: PASSED");
    };
}
