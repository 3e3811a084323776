//! In-memory key-value store implementation.

use super::{KvResult, KvStore};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory `KvStore` backed by a concurrent map.
///
/// Used by the server binary and as the test substitute for the external
/// durable store.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_after_put() {
        let store = MemoryKvStore::new();
        store.put("k1", "v1").await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), Some("v1".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryKvStore::new();
        store.put("k1", "v1").await.unwrap();
        store.put("k1", "v2").await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), Some("v2".to_string()));
    }
}
