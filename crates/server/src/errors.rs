use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler error rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) => ApiError::BadRequest(e.to_string()),
            ServiceError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Bodies that do not decode into the expected shape are client errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = self.to_string();
        if status.is_server_error() {
            error!(error = %msg, %status, "request failed");
        } else {
            warn!(error = %msg, %status, "request rejected");
        }
        (status, Json(serde_json::json!({"message": msg}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status() {
        let r = ApiError::from(ServiceError::Validation("title field is required".into())).into_response();
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);
        let r = ApiError::from(ServiceError::Storage("disk full".into())).into_response();
        assert_eq!(r.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let r = ApiError::NotFound("no section".into()).into_response();
        assert_eq!(r.status(), StatusCode::NOT_FOUND);
    }
}
