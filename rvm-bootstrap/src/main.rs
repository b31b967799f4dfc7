use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use rvm_infrastructure::{AppConfig, CONFIG_ENV};

#[derive(Parser, Debug)]
#[command(name = "rvm-admin")]
#[command(about = "Reverse vending machine admin API", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listen address, e.g. 0.0.0.0:5001
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    let mut config = AppConfig::load().await?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
        config.validate()?;
    }

    let _log_guard = rvm_bootstrap::logging::init_tracing(&config)?;
    match &config.loaded_from {
        Some(path) => info!(path = %path, "config loaded"),
        None => warn!("config.toml not found, using defaults"),
    }

    rvm_bootstrap::run_standalone(config).await
}
