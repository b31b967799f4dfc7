use std::sync::Arc;

use rvm_domain::ports::FleetRepository;
use rvm_domain::RuntimeConfig;

use crate::{Metrics, SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub fleet: Arc<dyn FleetRepository>,
    pub sessions: Arc<SessionStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, fleet: Arc<dyn FleetRepository>) -> Self {
        Self {
            config,
            fleet,
            sessions: Arc::new(SessionStore::default()),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
