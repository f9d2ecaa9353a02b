//! The configuration file format, version 1.

use std::path::Path;

use query_engine_metadata::metadata;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::connection_settings::DatabaseConnectionSettings;
use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::PoolSettings;

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

/// Initial configuration, just enough to connect to a database and elaborate a full
/// 'Configuration'.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    #[serde(default)]
    pub connection_settings: DatabaseConnectionSettings,
    #[serde(skip_serializing_if = "PoolSettings::is_default")]
    #[serde(default)]
    pub pool_settings: PoolSettings,
    #[serde(default)]
    pub metadata: metadata::Metadata,
}

impl ParsedConfiguration {
    /// The configuration used when no configuration directory is given.
    pub fn initial() -> Self {
        ParsedConfiguration {
            version: CURRENT_VERSION,
            connection_settings: DatabaseConnectionSettings::empty(),
            pool_settings: PoolSettings::default(),
            metadata: metadata::Metadata::default(),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents = fs::read_to_string(&configuration_file)
        .await
        .map_err(|error| ParseConfigurationError::IoError {
            file_path: configuration_file.clone(),
            error,
        })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion(
            parsed_config.version,
            CURRENT_VERSION,
        ));
    }

    tracing::debug!(
        file = %configuration_file.display(),
        tables = parsed_config.metadata.tables.0.len(),
        "parsed configuration"
    );

    Ok(parsed_config)
}

/// Write the parsed configuration, and the json schema describing it, into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: &ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(parsed_config)? + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path =
        out_dir.as_ref().join(CONFIGURATION_JSONSCHEMA_FILENAME);

    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&configuration_schema())? + "\n",
    )
    .await?;

    Ok(())
}

/// The json schema of the configuration file.
pub fn configuration_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(ParsedConfiguration)
}
