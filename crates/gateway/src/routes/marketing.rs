//! Routes over the marketing users table.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use query_engine_translation::translation::marketing;

use super::{fetch, DataResponse};
use crate::error::ServerError;
use crate::state::ServerState;

/// The query keys accepted by the filter route.
const EDUCATION_PARAM: &str = "education";
const MARITAL_STATUS_PARAM: &str = "maritals";

#[tracing::instrument(skip(state))]
pub async fn users(State(state): State<ServerState>) -> Result<Json<DataResponse>, ServerError> {
    let plan = marketing::users(&state.metadata)?;
    fetch(&state, &plan).await
}

#[tracing::instrument(skip(state))]
pub async fn list_educations(
    State(state): State<ServerState>,
) -> Result<Json<DataResponse>, ServerError> {
    let plan = marketing::list_educations(&state.metadata)?;
    fetch(&state, &plan).await
}

#[tracing::instrument(skip(state))]
pub async fn list_maritals(
    State(state): State<ServerState>,
) -> Result<Json<DataResponse>, ServerError> {
    let plan = marketing::list_maritals(&state.metadata)?;
    fetch(&state, &plan).await
}

#[tracing::instrument(skip(state))]
pub async fn filter(
    State(state): State<ServerState>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<DataResponse>, ServerError> {
    let users_filter = marketing::UsersFilter::new(
        params.remove(EDUCATION_PARAM),
        params.remove(MARITAL_STATUS_PARAM),
    );
    let plan = marketing::filter(&state.metadata, &users_filter)?;
    fetch(&state, &plan).await
}
