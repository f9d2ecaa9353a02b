//! The database the gateway reads from.
//!
//! Handlers only see the `Database` trait. The process constructs one
//! `PostgresDatabase` at startup and injects it into the router state; tests
//! inject their own implementation instead.

use async_trait::async_trait;
use query_engine_sql::sql::execution_plan::ExecutionPlan;

use crate::error::Error;
use crate::metrics::Metrics;
use crate::query;

/// Something that can run an execution plan and hand back its json result.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run the plan and return the single json value it produces.
    async fn fetch(&self, plan: &ExecutionPlan) -> Result<serde_json::Value, Error>;

    /// Check that the database can be reached.
    async fn health_check(&self) -> Result<(), Error>;
}

/// A PostgreSQL database behind a connection pool.
#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    pool: sqlx::PgPool,
    metrics: Metrics,
}

impl PostgresDatabase {
    pub fn new(pool: sqlx::PgPool, metrics: Metrics) -> Self {
        PostgresDatabase { pool, metrics }
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn fetch(&self, plan: &ExecutionPlan) -> Result<serde_json::Value, Error> {
        let result = query::execute(&self.pool, &self.metrics, plan).await;
        self.metrics.update_pool_metrics(&self.pool);
        result
    }

    async fn health_check(&self) -> Result<(), Error> {
        query::health_check(&self.pool).await
    }
}
