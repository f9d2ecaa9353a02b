//! The HTTP surface of the gateway.

mod health;
mod marketing;
mod metrics;
mod request_params;
mod requests;
mod sales;

use axum::{
    routing::{get, on, post, MethodFilter},
    Json, Router,
};
use serde::Serialize;

use query_engine_sql::sql::execution_plan::ExecutionPlan;

use crate::error::ServerError;
use crate::state::ServerState;

/// The body of every data route: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: serde_json::Value,
}

/// Bind every route to its handler.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(requests::root))
        .route("/request_get", get(requests::request_get))
        .route("/request_post", post(requests::request_post))
        .route(
            "/request_all",
            on(
                MethodFilter::GET | MethodFilter::POST | MethodFilter::PUT,
                requests::request_all,
            ),
        )
        .route(
            "/request_param/:value_1/:value_2",
            get(request_params::capture),
        )
        .route("/request_param/get", get(request_params::query))
        .route("/request_param/post", post(request_params::form))
        .route("/request_param/post_json", post(request_params::json))
        .route("/marketing/users", get(marketing::users))
        .route(
            "/marketing/users/list_educations",
            get(marketing::list_educations),
        )
        .route("/marketing/users/list_maritals", get(marketing::list_maritals))
        .route("/marketing/users/filter", get(marketing::filter))
        .route("/sales/list/:column", get(sales::list))
        .route("/sales/date/:month/:day/:year", get(sales::by_date))
        .route("/sales/summary/:column", get(sales::summary))
        .route("/health", get(health::health))
        .route("/metrics", get(metrics::metrics))
        .with_state(state)
}

/// Run a plan against the database and wrap its result.
async fn fetch(state: &ServerState, plan: &ExecutionPlan) -> Result<Json<DataResponse>, ServerError> {
    let data = state.database.fetch(plan).await?;
    Ok(Json(DataResponse { data }))
}
