//! Metadata information regarding the database and tracked information.

pub mod database;

// re-export without modules
pub use database::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
/// Defaults to the tables the gateway serves out of the box.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub tables: TablesInfo,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            tables: TablesInfo::empty(),
        }
    }
}

