use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rota_providers::ProviderError;
use rota_sequencer::{sequencer::SequenceError, snapshot::StoreError};
use tracing::error;

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
    ServiceUnavailable(String),
    BadGateway(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        error!("Snapshot store failure: {}", error);
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<SequenceError> for ApiError {
    fn from(error: SequenceError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::InvalidInput(message) => ApiError::BadRequest(message),
            ProviderError::Disabled => ApiError::ServiceUnavailable(error.to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::ServiceUnavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, message).into_response()
            }
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message).into_response(),
        }
    }
}
