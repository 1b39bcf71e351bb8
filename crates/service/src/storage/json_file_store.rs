use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::config_store::{validate_key, ConfigStore};

/// JSON file-backed configuration store.
///
/// Every key is stored as `<dir>/<key>.json`. Writes go to a temporary file
/// that is renamed over the target, so readers see either the old or the new
/// blob and never a truncated one.
#[derive(Clone, Debug)]
pub struct JsonFileConfigStore {
    dir: PathBuf,
}

impl JsonFileConfigStore {
    /// Initialize the store rooted at `dir`, creating the directory if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ServiceError::storage(&format!("create {}", dir.display()), e))?;
        Ok(Arc::new(Self { dir }))
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, ServiceError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl ConfigStore for JsonFileConfigStore {
    async fn read(&self, key: &str) -> Result<Option<Value>, ServiceError> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| ServiceError::storage(&format!("decode {}", path.display()), e))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::storage(&format!("read {}", path.display()), e)),
        }
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), ServiceError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.{}.tmp", Uuid::new_v4()));
        let data = serde_json::to_vec_pretty(&value).map_err(|e| ServiceError::storage("encode", e))?;
        if let Err(e) = fs::write(&tmp, &data).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::storage(&format!("write {}", tmp.display()), e));
        }
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::storage(&format!("replace {}", path.display()), e));
        }
        debug!(key, path = %path.display(), bytes = data.len(), "config blob written");
        Ok(())
    }
}
