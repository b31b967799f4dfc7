use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::entities::{
    EmptyReceipt, FleetSeed, FleetSummary, Machine, MachineDefaults, MachineDetail, MachineDraft,
    Transaction, User, UserDetail,
};
use crate::error::DirectoryError;
use crate::utils::machine_code;

/// Codes that collide with static routes under `/admin/machines/`.
pub const RESERVED_MACHINE_CODES: &[&str] = &["add"];

/// In-memory owner of the users, machines and transactions of one fleet.
///
/// Rows keep insertion order. Users are indexed by `id` and machines by their
/// external code; both indexes are updated on every insert.
#[derive(Debug, Default)]
pub struct FleetDirectory {
    users: Vec<User>,
    machines: Vec<Machine>,
    transactions: Vec<Transaction>,
    user_index: HashMap<u64, usize>,
    machine_index: HashMap<String, usize>,
    defaults: MachineDefaults,
}

impl FleetDirectory {
    pub fn new(defaults: MachineDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Builds a directory from seed rows. Rejects duplicate ids or codes,
    /// reserved codes, overfilled machines, and transactions that point at
    /// a missing user or machine.
    pub fn from_seed(seed: FleetSeed, defaults: MachineDefaults) -> Result<Self, DirectoryError> {
        let mut directory = Self::new(defaults);

        for user in seed.users {
            if directory.user_index.contains_key(&user.id) {
                return Err(DirectoryError::InvalidArgument(format!(
                    "duplicate user id {}",
                    user.id
                )));
            }
            directory.user_index.insert(user.id, directory.users.len());
            directory.users.push(user);
        }

        let mut machine_ids = HashSet::new();
        for mut machine in seed.machines {
            if !machine_ids.insert(machine.id) {
                return Err(DirectoryError::InvalidArgument(format!(
                    "duplicate machine id {}",
                    machine.id
                )));
            }
            if directory.machine_index.contains_key(&machine.machine_id) {
                return Err(DirectoryError::DuplicateCode(machine.machine_id));
            }
            ensure_code_not_reserved(&machine.machine_id)?;
            if machine.current_bottles > machine.max_capacity {
                return Err(DirectoryError::InvalidArgument(format!(
                    "machine '{}' holds {} bottles but capacity is {}",
                    machine.machine_id, machine.current_bottles, machine.max_capacity
                )));
            }
            machine.refresh_is_full();
            directory
                .machine_index
                .insert(machine.machine_id.clone(), directory.machines.len());
            directory.machines.push(machine);
        }

        let mut transaction_ids = HashSet::new();
        for tx in &seed.transactions {
            if !transaction_ids.insert(tx.id) {
                return Err(DirectoryError::InvalidArgument(format!(
                    "duplicate transaction id {}",
                    tx.id
                )));
            }
            if !directory.user_index.contains_key(&tx.user_id) {
                return Err(DirectoryError::InvalidArgument(format!(
                    "transaction {} references unknown user {}",
                    tx.id, tx.user_id
                )));
            }
            if let Some(code) = tx.machine_id.as_deref() {
                if !directory.machine_index.contains_key(code) {
                    return Err(DirectoryError::InvalidArgument(format!(
                        "transaction {} references unknown machine '{}'",
                        tx.id, code
                    )));
                }
            }
        }

        directory.transactions = seed.transactions;
        Ok(directory)
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            total_users: self.users.len(),
            total_machines: self.machines.len(),
            total_transactions: self.transactions.len(),
        }
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn user_detail(&self, user_id: u64) -> Result<UserDetail, DirectoryError> {
        let user = self
            .user_index
            .get(&user_id)
            .map(|&idx| self.users[idx].clone())
            .ok_or(DirectoryError::UserNotFound(user_id))?;
        let transactions = self
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect();
        Ok(UserDetail { user, transactions })
    }

    pub fn list_machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn machine_detail(&self, code: &str) -> Result<MachineDetail, DirectoryError> {
        let machine = self.find_machine(code)?.clone();
        let transactions = self
            .transactions
            .iter()
            .filter(|tx| tx.belongs_to_machine(code))
            .cloned()
            .collect();
        let fill_percentage = machine.fill_percentage();
        Ok(MachineDetail {
            machine,
            transactions,
            fill_percentage,
        })
    }

    pub fn empty_machine(
        &mut self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<EmptyReceipt, DirectoryError> {
        let idx = self.machine_position(code)?;
        let machine = &mut self.machines[idx];
        let bottles_collected = machine.empty(now);
        Ok(EmptyReceipt {
            machine: machine.clone(),
            bottles_collected,
        })
    }

    pub fn add_machine(
        &mut self,
        draft: MachineDraft,
        now: DateTime<Utc>,
    ) -> Result<Machine, DirectoryError> {
        let draft = draft.normalized();
        if let Some(code) = draft.machine_id.as_deref() {
            if self.machine_index.contains_key(code) {
                return Err(DirectoryError::DuplicateCode(code.to_string()));
            }
            ensure_code_not_reserved(code)?;
        }
        let machine = draft.resolve(
            self.next_machine_id()?,
            self.next_free_code(),
            &self.defaults,
            now,
        )?;
        self.machine_index
            .insert(machine.machine_id.clone(), self.machines.len());
        self.machines.push(machine.clone());
        Ok(machine)
    }

    fn find_machine(&self, code: &str) -> Result<&Machine, DirectoryError> {
        self.machine_position(code).map(|idx| &self.machines[idx])
    }

    fn machine_position(&self, code: &str) -> Result<usize, DirectoryError> {
        self.machine_index
            .get(code)
            .copied()
            .ok_or_else(|| DirectoryError::MachineNotFound(code.to_string()))
    }

    fn next_machine_id(&self) -> Result<u64, DirectoryError> {
        self.machines
            .iter()
            .map(|m| m.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| DirectoryError::InvalidArgument("machine id space exhausted".to_string()))
    }

    fn next_free_code(&self) -> String {
        let mut seq = self.machines.len() + 1;
        loop {
            let code = machine_code(seq);
            if !self.machine_index.contains_key(&code) {
                return code;
            }
            seq += 1;
        }
    }
}

fn ensure_code_not_reserved(code: &str) -> Result<(), DirectoryError> {
    if RESERVED_MACHINE_CODES.contains(&code) {
        return Err(DirectoryError::InvalidArgument(format!(
            "machine code '{}' is reserved",
            code
        )));
    }
    Ok(())
}
