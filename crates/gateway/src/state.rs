//! State shared by every request.
//!
//! This is initialized on startup and never changed afterwards.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use query_engine_execution::database::{Database, PostgresDatabase};
use query_engine_execution::metrics::Metrics;
use query_engine_metadata::metadata::Metadata;
use query_gateway_configuration::Configuration;

/// State for our server.
#[derive(Clone)]
pub struct ServerState {
    pub database: Arc<dyn Database>,
    pub metadata: Arc<Metadata>,
    pub metrics_registry: Arc<prometheus::Registry>,
}

impl ServerState {
    pub fn new(
        database: Arc<dyn Database>,
        metadata: Metadata,
        metrics_registry: prometheus::Registry,
    ) -> Self {
        ServerState {
            database,
            metadata: Arc::new(metadata),
            metrics_registry: Arc::new(metrics_registry),
        }
    }
}

/// Create a connection pool and wrap it inside a server State.
pub fn create_state(configuration: Configuration) -> Result<ServerState, InitializationError> {
    let mut metrics_registry = prometheus::Registry::new();
    let metrics =
        Metrics::initialize(&mut metrics_registry).map_err(InitializationError::MetricsError)?;

    let pool = create_pool(&configuration).map_err(InitializationError::UnableToCreatePool)?;
    metrics.update_pool_metrics(&pool);

    Ok(ServerState::new(
        Arc::new(PostgresDatabase::new(pool, metrics)),
        configuration.metadata,
        metrics_registry,
    ))
}

/// Create a pool that only connects on first use, so a database that is down
/// does not prevent the server from starting.
pub fn create_pool(configuration: &Configuration) -> Result<sqlx::PgPool, sqlx::Error> {
    let settings = &configuration.pool_settings;
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.pool_timeout))
        .idle_timeout(settings.idle_timeout.map(Duration::from_secs))
        .max_lifetime(settings.connection_lifetime.map(Duration::from_secs))
        .connect_lazy(configuration.connection_uri.expose())
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
