//! A `Database` that records what it is asked to run instead of running it.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use query_engine_execution::database::Database;
use query_engine_execution::error::Error;
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::string::SQL;

#[derive(Debug, Default)]
pub struct RecordingDatabase {
    responses: HashMap<String, serde_json::Value>,
    failing: bool,
    executed: Mutex<Vec<ExecutionPlan>>,
}

impl RecordingDatabase {
    /// A database answering every plan with an empty array.
    pub fn new() -> Self {
        RecordingDatabase::default()
    }

    /// A database that cannot be reached.
    pub fn failing() -> Self {
        RecordingDatabase {
            failing: true,
            ..RecordingDatabase::default()
        }
    }

    /// Answer plans with the given root field with this value.
    #[must_use]
    pub fn with_response(mut self, root_field: &str, value: serde_json::Value) -> Self {
        self.responses.insert(root_field.to_string(), value);
        self
    }

    /// The plans fetched so far, in order.
    pub fn executed(&self) -> Vec<ExecutionPlan> {
        self.executed.lock().unwrap().clone()
    }

    /// The rendered statements fetched so far, in order.
    pub fn executed_sql(&self) -> Vec<SQL> {
        self.executed()
            .iter()
            .map(ExecutionPlan::query_sql)
            .collect()
    }
}

#[async_trait]
impl Database for RecordingDatabase {
    async fn fetch(&self, plan: &ExecutionPlan) -> Result<serde_json::Value, Error> {
        self.executed.lock().unwrap().push(plan.clone());
        if self.failing {
            return Err(Error::DB(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .responses
            .get(&plan.root_field)
            .cloned()
            .unwrap_or_else(|| serde_json::json!([])))
    }

    async fn health_check(&self) -> Result<(), Error> {
        if self.failing {
            Err(Error::DB(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}
