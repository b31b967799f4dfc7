// Runtime configuration handed to the application layer

use crate::entities::MachineDefaults;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub seed_path: Option<String>,
    pub default_machine_name: String,
    pub default_machine_city: String,
    pub default_max_capacity: u32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl RuntimeConfig {
    /// Admin routes are gated once either a static token or login
    /// credentials are configured.
    pub fn auth_enabled(&self) -> bool {
        self.api_token.is_some() || self.login_enabled()
    }

    pub fn login_enabled(&self) -> bool {
        self.admin_username.is_some() && self.admin_password.is_some()
    }

    pub fn machine_defaults(&self) -> MachineDefaults {
        MachineDefaults {
            name: self.default_machine_name.clone(),
            city: self.default_machine_city.clone(),
            max_capacity: self.default_max_capacity,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let defaults = MachineDefaults::default();
        Self {
            bind_addr: "127.0.0.1:5001".to_string(),
            api_token: None,
            admin_username: None,
            admin_password: None,
            seed_path: None,
            default_machine_name: defaults.name,
            default_machine_city: defaults.city,
            default_max_capacity: defaults.max_capacity,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}
