use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    EmptyReceipt, FleetSummary, Machine, MachineDetail, MachineDraft, User, UserDetail,
};
use crate::error::DirectoryError;

/// Shared access to the fleet directory.
///
/// Implementations serialize `empty_machine` and `add_machine` against every
/// other call so each mutation is applied as one unit.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn summary(&self) -> FleetSummary;
    async fn list_users(&self) -> Vec<User>;
    async fn user_detail(&self, user_id: u64) -> Result<UserDetail, DirectoryError>;
    async fn list_machines(&self) -> Vec<Machine>;
    async fn machine_detail(&self, code: &str) -> Result<MachineDetail, DirectoryError>;
    async fn empty_machine(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<EmptyReceipt, DirectoryError>;
    async fn add_machine(
        &self,
        draft: MachineDraft,
        now: DateTime<Utc>,
    ) -> Result<Machine, DirectoryError>;
}
