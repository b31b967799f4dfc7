// Transaction entity
// Append-only ledger row linking a user to a machine (earn) or a brand (redeem)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::TransactionKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub points: i64,
    #[serde(default)]
    pub bottles: u32,
    /// External machine code, only set for earn rows.
    #[serde(default)]
    pub machine_id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn belongs_to_machine(&self, code: &str) -> bool {
        self.machine_id.as_deref() == Some(code)
    }
}
