// User entity
// A registered recycler earning points for returned bottles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub mobile: u64,
    pub points: u64,
    pub bottles: u64,
    pub created_at: DateTime<Utc>,
}
