use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn storage(context: &str, e: impl std::fmt::Display) -> Self {
        Self::Storage(format!("{context}: {e}"))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            // 存储的 blob 无法解析视为存储故障
            ModelError::Serialization(msg) => ServiceError::Storage(msg),
        }
    }
}
