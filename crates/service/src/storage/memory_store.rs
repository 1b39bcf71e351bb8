use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::config_store::{validate_key, ConfigStore};

/// In-process store, used by tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryConfigStore {
    inner: RwLock<HashMap<String, Value>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: Value) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value);
        Self { inner: RwLock::new(map) }
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn read(&self, key: &str) -> Result<Option<Value>, ServiceError> {
        validate_key(key)?;
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), ServiceError> {
        validate_key(key)?;
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value);
        Ok(())
    }
}
