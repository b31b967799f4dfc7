// Machine entity
// A deployed reverse-vending machine and its fill state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;
use crate::utils::normalize_optional_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: u64,
    pub machine_id: String,
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub current_bottles: u32,
    pub max_capacity: u32,
    #[serde(default)]
    pub total_bottles: u64,
    #[serde(default)]
    pub is_full: bool,
    #[serde(default)]
    pub last_emptied: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Machine {
    /// Share of capacity in use, 0..=100. A machine without capacity reports 0.
    pub fn fill_percentage(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_bottles) / f64::from(self.max_capacity) * 100.0
    }

    /// Recomputes `is_full` from the bottle count. Must run after every
    /// change to `current_bottles`.
    pub fn refresh_is_full(&mut self) {
        self.is_full = self.max_capacity > 0 && self.current_bottles >= self.max_capacity;
    }

    /// Resets the bin and returns how many bottles were taken out.
    pub fn empty(&mut self, now: DateTime<Utc>) -> u32 {
        let collected = self.current_bottles;
        self.current_bottles = 0;
        self.last_emptied = Some(now);
        self.refresh_is_full();
        collected
    }
}

/// Fallback values applied to fields missing from a [`MachineDraft`].
#[derive(Debug, Clone, PartialEq)]
pub struct MachineDefaults {
    pub name: String,
    pub city: String,
    pub max_capacity: u32,
}

impl Default for MachineDefaults {
    fn default() -> Self {
        Self {
            name: "Demo Machine".to_string(),
            city: "Unknown".to_string(),
            max_capacity: 100,
        }
    }
}

/// Partial machine specification accepted by the add-machine operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineDraft {
    pub machine_id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub max_capacity: Option<i64>,
}

impl MachineDraft {
    /// Trims text fields; blank values count as missing.
    pub fn normalized(self) -> Self {
        Self {
            machine_id: normalize_optional_text(self.machine_id),
            name: normalize_optional_text(self.name),
            city: normalize_optional_text(self.city),
            lat: self.lat,
            lng: self.lng,
            max_capacity: self.max_capacity,
        }
    }

    /// Fills every missing field and builds the new machine row.
    ///
    /// `fallback_code` is used only when the draft carries no `machine_id`.
    pub fn resolve(
        self,
        id: u64,
        fallback_code: String,
        defaults: &MachineDefaults,
        now: DateTime<Utc>,
    ) -> Result<Machine, DirectoryError> {
        let max_capacity = match self.max_capacity {
            Some(value) if value <= 0 => {
                return Err(DirectoryError::InvalidArgument(format!(
                    "max_capacity must be > 0, got {}",
                    value
                )))
            }
            Some(value) => u32::try_from(value).map_err(|_| {
                DirectoryError::InvalidArgument(format!("max_capacity {} is too large", value))
            })?,
            None => defaults.max_capacity,
        };
        let mut machine = Machine {
            id,
            machine_id: self.machine_id.unwrap_or(fallback_code),
            name: self.name.unwrap_or_else(|| defaults.name.clone()),
            city: self.city.unwrap_or_else(|| defaults.city.clone()),
            lat: self.lat.unwrap_or(0.0),
            lng: self.lng.unwrap_or(0.0),
            current_bottles: 0,
            max_capacity,
            total_bottles: 0,
            is_full: false,
            last_emptied: None,
            created_at: now,
        };
        machine.refresh_is_full();
        Ok(machine)
    }
}
