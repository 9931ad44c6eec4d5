//! genai-gateway server binary

use anyhow::Context;
use clap::Parser;
use genai_gateway::config::{Config, DEFAULT_CONFIG_PATH};
use genai_gateway::server::builder::run_server;
use genai_gateway::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "HTTP gateway for generative AI capabilities")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Override `server.port`
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long, env = "GATEWAY_JSON_LOGS")]
    json_logs: bool,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(&args.config)
        .await
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate().context("validating command line overrides")?;

    run_server(config).await.context("running server")
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if let Err(e) = init_tracing(args.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate Display prints the whole context chain
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
