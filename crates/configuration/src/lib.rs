pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod values;
pub mod version1;

pub use configuration::{make_runtime_configuration, Configuration};
pub use values::{ConnectionUri, PoolSettings, Secret};
pub use version1::{
    configuration_schema, parse_configuration, write_parsed_configuration, ParsedConfiguration,
};
