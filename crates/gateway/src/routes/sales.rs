//! Routes over the supermarket sales table.

use axum::{
    extract::{Path, State},
    Json,
};

use query_engine_translation::translation::sales;

use super::{fetch, DataResponse};
use crate::error::ServerError;
use crate::state::ServerState;

#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<ServerState>,
    Path(column): Path<String>,
) -> Result<Json<DataResponse>, ServerError> {
    let plan = sales::list(&state.metadata, &column)?;
    fetch(&state, &plan).await
}

#[tracing::instrument(skip(state))]
pub async fn by_date(
    State(state): State<ServerState>,
    Path((month, day, year)): Path<(String, String, String)>,
) -> Result<Json<DataResponse>, ServerError> {
    let date = sales::SalesDate { month, day, year };
    let plan = sales::by_date(&state.metadata, &date)?;
    fetch(&state, &plan).await
}

#[tracing::instrument(skip(state))]
pub async fn summary(
    State(state): State<ServerState>,
    Path(column): Path<String>,
) -> Result<Json<DataResponse>, ServerError> {
    let plan = sales::summary(&state.metadata, &column)?;
    fetch(&state, &plan).await
}
