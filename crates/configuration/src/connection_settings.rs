//! Database connection settings.

use crate::values::Secret;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_VARIABLE: &str = "POSTGRES_USER";
pub const DEFAULT_PASSWORD_VARIABLE: &str = "POSTGRES_PASS";
pub const DEFAULT_HOST_VARIABLE: &str = "POSTGRES_HOST";
pub const DEFAULT_PORT_VARIABLE: &str = "POSTGRES_PORT";
pub const DEFAULT_DATABASE_VARIABLE: &str = "POSTGRES_DB";

/// Database connection settings. By default every part is read from the environment.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    #[serde(default = "user_default")]
    pub user: Secret,
    #[serde(default = "password_default")]
    pub password: Secret,
    #[serde(default = "host_default")]
    pub host: Secret,
    #[serde(default = "port_default")]
    pub port: Secret,
    #[serde(default = "database_default")]
    pub database: Secret,
}

impl DatabaseConnectionSettings {
    pub fn empty() -> Self {
        Self {
            user: user_default(),
            password: password_default(),
            host: host_default(),
            port: port_default(),
            database: database_default(),
        }
    }
}

impl Default for DatabaseConnectionSettings {
    fn default() -> Self {
        Self::empty()
    }
}

// for serde default //
fn user_default() -> Secret {
    Secret::from_environment(DEFAULT_USER_VARIABLE)
}
fn password_default() -> Secret {
    Secret::from_environment(DEFAULT_PASSWORD_VARIABLE)
}
fn host_default() -> Secret {
    Secret::from_environment(DEFAULT_HOST_VARIABLE)
}
fn port_default() -> Secret {
    Secret::from_environment(DEFAULT_PORT_VARIABLE)
}
fn database_default() -> Secret {
    Secret::from_environment(DEFAULT_DATABASE_VARIABLE)
}
