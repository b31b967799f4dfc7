// Read models returned by directory queries

use serde::{Deserialize, Serialize};

use super::{Machine, Transaction, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_users: usize,
    pub total_machines: usize,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    pub user: User,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineDetail {
    pub machine: Machine,
    pub transactions: Vec<Transaction>,
    pub fill_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyReceipt {
    pub machine: Machine,
    pub bottles_collected: u32,
}
