//! An HTTP gateway serving marketing and retail sales data as json.

pub mod error;
pub mod options;
pub mod routes;
pub mod state;
