use axum::{extract::State, http::header, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::error::ServerError;
use crate::state::ServerState;

/// Prometheus text exposition of every registered metric.
pub async fn metrics(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    let encoder = TextEncoder::new();
    let body = encoder
        .encode_to_string(&state.metrics_registry.gather())
        .map_err(|err| ServerError::Internal(format!("Unable to encode metrics: {err}")))?;
    Ok((
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        body,
    ))
}
