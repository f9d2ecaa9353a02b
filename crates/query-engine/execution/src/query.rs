//! Execute an execution plan against the database.

use query_engine_sql::sql;
use sqlx::Row;
use tracing::{info_span, Instrument};

use crate::error::Error;
use crate::metrics::Metrics;

/// Execute a query against postgres.
///
/// The plan is expected to produce one row whose first column holds the whole json result.
pub async fn execute(
    pool: &sqlx::PgPool,
    metrics: &Metrics,
    plan: &sql::execution_plan::ExecutionPlan,
) -> Result<serde_json::Value, Error> {
    let query = plan.query_sql();

    tracing::info!(
        root_field = %plan.root_field,
        generated_sql = %query.sql,
        params = ?&query.params,
    );

    let timer = metrics.time_query();

    let result = async {
        let row = build_query_with_params(&query).fetch_one(pool).await?;
        row.try_get::<serde_json::Value, _>(0)
    }
    .instrument(info_span!("Database request", root_field = %plan.root_field))
    .await;

    timer.observe_duration();

    match result {
        Ok(value) => {
            metrics.record_successful_query();
            Ok(value)
        }
        Err(err) => {
            metrics.record_failed_query();
            tracing::error!(root_field = %plan.root_field, error = %err, "query failed");
            Err(Error::DB(err))
        }
    }
}

/// Run a trivial query to check that the database is reachable.
pub async fn health_check(pool: &sqlx::PgPool) -> Result<(), Error> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .instrument(info_span!("Health check"))
        .await?;
    Ok(())
}

/// Create a SQLx query based on our SQL query and bind our parameters to it.
fn build_query_with_params(
    query: &sql::string::SQL,
) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
    query
        .params
        .iter()
        .fold(sqlx::query(query.sql.as_str()), |sqlx_query, param| match param {
            sql::string::Param::String(s) => sqlx_query.bind(s.as_str()),
        })
}
