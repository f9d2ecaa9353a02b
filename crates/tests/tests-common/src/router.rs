//! Build the real router around a test database.

use std::sync::Arc;

use axum_test_helper::TestClient;

use query_engine_execution::metrics::Metrics;
use query_engine_metadata::metadata::Metadata;
use query_gateway::routes::create_router;
use query_gateway::state::ServerState;

use super::database::RecordingDatabase;

/// A client for the router, serving the default metadata from `database`.
pub fn client(database: &Arc<RecordingDatabase>) -> TestClient {
    client_with_metadata(database, Metadata::default())
}

pub fn client_with_metadata(database: &Arc<RecordingDatabase>, metadata: Metadata) -> TestClient {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut registry = prometheus::Registry::new();
    // registered so that /metrics has something to expose
    Metrics::initialize(&mut registry).unwrap();

    let state = ServerState::new(database.clone(), metadata, registry);
    TestClient::new(create_router(state))
}
