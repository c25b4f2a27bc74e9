//! In-process object store for tests and local runs

use crate::core::{ObjectStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// A stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Object store backed by a map, with optional failure injection
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<String, StoredObject>>,
    puts: RwLock<Vec<String>>,
    fail_prefix: Option<String>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every put whose key starts with `prefix`
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            fail_prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    /// Keys of every attempted put, in order
    pub async fn put_log(&self) -> Vec<String> {
        self.puts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StorageResult<()> {
        self.puts.write().await.push(key.to_string());

        if let Some(prefix) = &self.fail_prefix {
            if key.starts_with(prefix.as_str()) {
                return Err(StorageError::Status {
                    status: 503,
                    body: "injected failure".to_string(),
                });
            }
        }

        debug!("Memory store put {} ({} bytes)", key, bytes.len());
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let store = MemoryObjectStore::new();
        store.put("images/a.png", vec![1], "image/png").await.unwrap();
        store.put("images/a.png", vec![2], "image/png").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("images/a.png").await.unwrap().bytes, vec![2]);
        assert_eq!(store.put_log().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = MemoryObjectStore::failing_on("metadata/");
        assert!(store.put("images/a.png", vec![1], "image/png").await.is_ok());
        assert!(store.put("metadata/a.json", vec![1], "application/json").await.is_err());
        assert!(store.get("metadata/a.json").await.is_none());
    }
}
