use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use rvm_application::AppState;
use rvm_domain::{FleetDirectory, FleetSeed};
use rvm_infrastructure::{load_seed_file, AppConfig, InMemoryFleetRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let seed = match &runtime_config.seed_path {
            Some(path) => {
                let seed = load_seed_file(path).await?;
                info!(path = %path, "seed file loaded");
                seed
            }
            None => FleetSeed::demo(Utc::now()),
        };
        let directory = FleetDirectory::from_seed(seed, runtime_config.machine_defaults())
            .context("invalid seed data")?;
        let summary = directory.summary();
        info!(
            users = summary.total_users,
            machines = summary.total_machines,
            transactions = summary.total_transactions,
            "fleet directory ready"
        );

        let fleet = Arc::new(InMemoryFleetRepository::new(directory));
        Ok(Self {
            state: AppState::new(runtime_config, fleet),
        })
    }
}
