//! Describe the execution plan handed over from translation to execution.

use super::ast;
use super::string;

/// Definition of an execution plan to be run against the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// The name of the operation this plan answers, used for logging and metrics.
    pub root_field: String,
    /// A select returning a single row whose only column is a json value.
    pub select: ast::Select,
}

impl ExecutionPlan {
    pub fn new(root_field: impl Into<String>, select: ast::Select) -> Self {
        ExecutionPlan {
            root_field: root_field.into(),
            select,
        }
    }

    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> string::SQL {
        let mut sql = string::SQL::new();
        self.select.to_sql(&mut sql);
        sql
    }
}
