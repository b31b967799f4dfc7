// Seed rows loaded into the directory at startup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::TransactionKind;

use super::{Machine, Transaction, User};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetSeed {
    pub users: Vec<User>,
    pub machines: Vec<Machine>,
    pub transactions: Vec<Transaction>,
}

impl FleetSeed {
    /// Demonstration fleet: two users, two stations and one earn plus one
    /// redeem transaction.
    pub fn demo(now: DateTime<Utc>) -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                mobile: 1_111_111_111,
                points: 100,
                bottles: 10,
                created_at: now,
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                mobile: 2_222_222_222,
                points: 50,
                bottles: 5,
                created_at: now,
            },
        ];
        let machines = vec![
            Machine {
                id: 1,
                machine_id: "M001".to_string(),
                name: "RVM Station A".to_string(),
                city: "jim,korea".to_string(),
                lat: 10.823879417459477,
                lng: 78.70024710440879,
                current_bottles: 10,
                max_capacity: 100,
                total_bottles: 50,
                is_full: false,
                last_emptied: None,
                created_at: now,
            },
            Machine {
                id: 2,
                machine_id: "M002".to_string(),
                name: "RVM Station B".to_string(),
                city: "jim,korea".to_string(),
                lat: 12.9352,
                lng: 77.6245,
                current_bottles: 20,
                max_capacity: 100,
                total_bottles: 60,
                is_full: false,
                last_emptied: None,
                created_at: now,
            },
        ];
        let transactions = vec![
            Transaction {
                id: 1,
                user_id: 1,
                kind: TransactionKind::Earn,
                points: 20,
                bottles: 1,
                machine_id: Some("M001".to_string()),
                brand_id: None,
                created_at: now,
            },
            Transaction {
                id: 2,
                user_id: 1,
                kind: TransactionKind::Redeem,
                points: 50,
                bottles: 0,
                machine_id: None,
                brand_id: Some(1),
                created_at: now,
            },
        ];
        Self {
            users,
            machines,
            transactions,
        }
    }
}
