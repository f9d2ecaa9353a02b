use axum::{extract::State, http::StatusCode};

use crate::error::ServerError;
use crate::state::ServerState;

/// 204 when the database answers, 503 otherwise.
pub async fn health(State(state): State<ServerState>) -> Result<StatusCode, ServerError> {
    state
        .database
        .health_check()
        .await
        .map_err(|err| ServerError::ServiceUnavailable(err.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
