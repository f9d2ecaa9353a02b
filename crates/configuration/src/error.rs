//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {}:{line}:{column}: {message}", .file_path.display())]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {0}, expected {1}")]
    UnsupportedVersion(u32, u32),
    #[error("{}: {error}", .file_path.display())]
    IoError {
        file_path: PathBuf,
        error: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid connection setting '{setting}': {error}")]
    MissingEnvironmentVariable {
        setting: &'static str,
        error: crate::environment::Error,
    },
    #[error("invalid database port '{0}'")]
    InvalidPort(String),
}
