use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use query_gateway::options::{Command, ServeOptions, ServerOptions};
use query_gateway::{routes, state};
use query_gateway_configuration::environment::ProcessEnvironment;
use query_gateway_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = ServerOptions::parse();
    let result = match options.command {
        Some(Command::Initialize { out_dir }) => initialize(&out_dir).await,
        None => serve(&options.serve).await,
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn initialize(out_dir: &Path) -> anyhow::Result<()> {
    write_parsed_configuration(&ParsedConfiguration::initial(), out_dir)
        .await
        .with_context(|| format!("unable to write a configuration to {}", out_dir.display()))?;
    tracing::info!("wrote a default configuration to {}", out_dir.display());
    Ok(())
}

async fn serve(options: &ServeOptions) -> anyhow::Result<()> {
    let parsed = match &options.configuration {
        Some(dir) => parse_configuration(dir)
            .await
            .with_context(|| format!("unable to read the configuration in {}", dir.display()))?,
        None => ParsedConfiguration::initial(),
    };
    let configuration = make_runtime_configuration(parsed, ProcessEnvironment)?;
    let state = state::create_state(configuration)?;
    let router = routes::create_router(state);

    let address = options.address();
    tracing::info!("listening on {address}");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;
    Ok(())
}
