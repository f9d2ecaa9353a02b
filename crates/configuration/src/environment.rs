//! Where configuration reads environment variables from.

use std::collections::HashMap;

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &str) -> Result<String, Error>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &str) -> Result<String, Error> {
        std::env::var(variable).map_err(|err| match err {
            std::env::VarError::NotPresent => Error::VariableNotPresent(variable.to_string()),
            std::env::VarError::NotUnicode(_) => Error::NonUnicodeValue(variable.to_string()),
        })
    }
}

/// A fixed set of variables, for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<String, String>);

impl From<HashMap<String, String>> for FixedEnvironment {
    fn from(variables: HashMap<String, String>) -> Self {
        Self(variables)
    }
}

impl<const N: usize> From<[(String, String); N]> for FixedEnvironment {
    fn from(variables: [(String, String); N]) -> Self {
        Self(HashMap::from(variables))
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &str) -> Result<String, Error> {
        self.0
            .get(variable)
            .cloned()
            .ok_or_else(|| Error::VariableNotPresent(variable.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    VariableNotPresent(String),
    #[error("the environment variable {0} is not valid unicode")]
    NonUnicodeValue(String),
}
