use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use rvm_domain::{
    DirectoryError, EmptyReceipt, FleetDirectory, FleetRepository, FleetSummary, Machine,
    MachineDetail, MachineDraft, User, UserDetail,
};

/// Process-local fleet store. One lock guards all three collections; the
/// mutating calls hold the write guard for their whole read-modify-write.
pub struct InMemoryFleetRepository {
    directory: RwLock<FleetDirectory>,
}

impl InMemoryFleetRepository {
    pub fn new(directory: FleetDirectory) -> Self {
        Self {
            directory: RwLock::new(directory),
        }
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleetRepository {
    async fn summary(&self) -> FleetSummary {
        self.directory.read().await.summary()
    }

    async fn list_users(&self) -> Vec<User> {
        self.directory.read().await.list_users().to_vec()
    }

    async fn user_detail(&self, user_id: u64) -> Result<UserDetail, DirectoryError> {
        self.directory.read().await.user_detail(user_id)
    }

    async fn list_machines(&self) -> Vec<Machine> {
        self.directory.read().await.list_machines().to_vec()
    }

    async fn machine_detail(&self, code: &str) -> Result<MachineDetail, DirectoryError> {
        self.directory.read().await.machine_detail(code)
    }

    async fn empty_machine(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<EmptyReceipt, DirectoryError> {
        self.directory.write().await.empty_machine(code, now)
    }

    async fn add_machine(
        &self,
        draft: MachineDraft,
        now: DateTime<Utc>,
    ) -> Result<Machine, DirectoryError> {
        self.directory.write().await.add_machine(draft, now)
    }
}
