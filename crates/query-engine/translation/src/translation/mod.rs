//! Translate the inputs of the data routes to an ExecutionPlan (SQL) to be run against the database.

pub mod error;
pub mod helpers;
pub mod marketing;
pub mod sales;
