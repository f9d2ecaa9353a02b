//! Errors raised while executing a plan.

use thiserror::Error;

/// Execution errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    DB(#[from] sqlx::Error),
}
