use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ServiceError;

/// Trait abstraction for configuration blob storage.
/// Implementations can be file-backed, in-memory, or remote KV.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the blob stored under `key`; `None` when nothing was ever written.
    async fn read(&self, key: &str) -> Result<Option<Value>, ServiceError>;
    /// Replace the blob stored under `key`.
    async fn write(&self, key: &str, value: Value) -> Result<(), ServiceError>;
}

/// Keys double as file names, so they must be plain names.
pub fn validate_key(key: &str) -> Result<(), ServiceError> {
    if key.trim().is_empty() {
        return Err(ServiceError::Validation("config key must not be empty".into()));
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") {
        return Err(ServiceError::Validation(format!("invalid config key {key:?}")));
    }
    Ok(())
}
