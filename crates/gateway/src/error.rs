use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use query_engine_execution::error::Error as ExecutionError;
use query_engine_translation::translation::error::Error as TranslationError;

/// Errors a handler can fail with. Each one becomes a json `{"message": ...}` body.
#[derive(Debug)]
pub enum ServerError {
    BadRequest(String),
    UnsupportedMediaType(String),
    Internal(String),
    DatabaseError(String),
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ServerError::Internal(msg) | ServerError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        if status.is_server_error() {
            tracing::error!("Returning error: {message} with status code: {status}");
        } else {
            tracing::info!("Returning error: {message} with status code: {status}");
        }
        (status, Json(JsonErrorResponse { message })).into_response()
    }
}

impl From<ExecutionError> for ServerError {
    fn from(value: ExecutionError) -> Self {
        ServerError::DatabaseError(value.to_string())
    }
}

impl From<TranslationError> for ServerError {
    fn from(value: TranslationError) -> Self {
        ServerError::BadRequest(value.to_string())
    }
}
