use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{self, Environment};

/// A configuration value which is either written inline or read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    FromEnvironment { variable: String },
}

impl Secret {
    pub fn from_environment(variable: &str) -> Self {
        Secret::FromEnvironment {
            variable: variable.to_string(),
        }
    }

    /// Produce the actual value, reading the environment if needed.
    pub fn resolve(&self, environment: &impl Environment) -> Result<String, environment::Error> {
        match self {
            Secret::Plain(value) => Ok(value.clone()),
            Secret::FromEnvironment { variable } => environment.read(variable),
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
