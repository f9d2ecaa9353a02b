//! Command line options.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct ServerOptions {
    #[command(flatten)]
    pub serve: ServeOptions,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Without a subcommand, the server is started.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a default configuration file and its json schema to a directory.
    Initialize {
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ServeOptions {
    #[arg(long, env = "QUERY_GATEWAY_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(long, env = "QUERY_GATEWAY_PORT", default_value_t = 5000)]
    pub port: u16,
    /// Directory holding a configuration.json. Defaults apply when omitted.
    #[arg(long, env = "QUERY_GATEWAY_CONFIGURATION", value_name = "DIR")]
    pub configuration: Option<PathBuf>,
}

impl ServeOptions {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
