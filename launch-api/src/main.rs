//! Token launch API server

use anyhow::Result;
use clap::Parser;
use launch_api::adapters::{DbcPoolBuilder, LightRpcClient, R2ObjectStore};
use launch_api::api::{self, ApiState};
use launch_api::{LaunchConfig, PipelineSettings, UploadPipeline};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launch-api")]
#[command(about = "Token launch API")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "launch.toml")]
    config: String,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Dry run mode (validate config and exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = Path::new(&cli.config);
    let file_found = config_path.exists();
    let mut config = LaunchConfig::load(file_found.then_some(config_path))?;

    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }

    init_logging(&config);

    if !file_found {
        warn!("Config file not found, using defaults and environment: {}", cli.config);
    }

    info!("Starting token launch API");
    info!("RPC endpoint: {}", config.chain.rpc_url);
    info!("Storage bucket: {}", config.storage.bucket);

    let pool_config_key = config.pool_config_key()?;
    info!("Pool config: {}", pool_config_key);
    info!("Configuration validated successfully");

    if cli.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    let timeout = Duration::from_secs(config.api.request_timeout_secs);
    let store = R2ObjectStore::new(&config.storage, timeout)?;
    let rpc = LightRpcClient::new(
        config.chain.rpc_url.clone(),
        config.chain.commitment.clone(),
        timeout,
    );
    match rpc.get_health().await {
        Ok(status) => info!("RPC health: {}", status),
        Err(e) => warn!("RPC health check failed: {}", e),
    }
    let builder = DbcPoolBuilder::new(rpc);

    let settings = PipelineSettings::new(
        &config.storage.public_base_url(),
        &config.chain.pool_config_key,
    );
    let pipeline = UploadPipeline::new(Arc::new(store), Arc::new(builder), settings);

    info!("Starting API server on {}", config.api.bind_address);
    let api_server = api::start_server(ApiState::new(pipeline), &config.api).await?;

    info!("Launch API started. Press Ctrl+C to shutdown.");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = api_server => {
            info!("API server finished");
        }
    }

    info!("Shutting down token launch API");
    Ok(())
}

fn init_logging(config: &LaunchConfig) {
    let log_level = config
        .monitoring
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launch_api={},tower_http={}", log_level, log_level).into()
    });

    if config.monitoring.structured_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
