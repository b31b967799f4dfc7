use std::sync::Arc;

use chrono::Utc;

use rvm_domain::{FleetDirectory, FleetSeed, RuntimeConfig};
use rvm_infrastructure::InMemoryFleetRepository;

use crate::AppState;

pub(crate) fn demo_state() -> AppState {
    demo_state_with(|_| {})
}

pub(crate) fn demo_state_with(configure: impl FnOnce(&mut RuntimeConfig)) -> AppState {
    let mut config = RuntimeConfig::default();
    configure(&mut config);
    let directory = FleetDirectory::from_seed(FleetSeed::demo(Utc::now()), config.machine_defaults())
        .expect("demo seed");
    AppState::new(config, Arc::new(InMemoryFleetRepository::new(directory)))
}
