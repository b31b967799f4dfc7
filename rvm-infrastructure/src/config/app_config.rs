use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;

use rvm_domain::{MachineDefaults, RuntimeConfig};

pub const CONFIG_ENV: &str = "RVM_ADMIN_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
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
    pub log_dir: Option<String>,
    pub log_format: String,
    /// Path of the file the config was read from, if it existed.
    #[serde(skip)]
    pub loaded_from: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let machine = MachineDefaults::default();
        Self {
            bind_addr: "127.0.0.1:5001".to_string(),
            api_token: None,
            admin_username: None,
            admin_password: None,
            seed_path: None,
            default_machine_name: machine.name,
            default_machine_city: machine.city,
            default_max_capacity: machine.max_capacity,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            log_dir: None,
            log_format: "text".to_string(),
            loaded_from: None,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `RVM_ADMIN_CONFIG` (default `./config.toml`),
    /// then applies `RVM_ADMIN_*` environment overrides.
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let mut config = Self::read_file(Path::new(&path)).await?;
        config.apply_env_overrides();
        config.finish(Path::new(&path).parent())?;
        Ok(config)
    }

    /// Same as [`AppConfig::load`] without environment overrides.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::read_file(path).await?;
        config.finish(path.parent())?;
        Ok(config)
    }

    async fn read_file(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)
            .map_err(|err| anyhow!("invalid config {}: {}", file_path.display(), err))?;
        config.loaded_from = Some(file_path.to_string_lossy().to_string());
        Ok(config)
    }

    fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.normalize();
        self.resolve_paths(base_dir);
        self.validate()
    }

    pub fn normalize(&mut self) {
        self.api_token = drop_blank(self.api_token.take());
        self.admin_username = drop_blank(self.admin_username.take());
        self.admin_password = drop_blank(self.admin_password.take());
        self.seed_path = drop_blank(self.seed_path.take());
        self.log_dir = drop_blank(self.log_dir.take());
        self.log_format = self.log_format.trim().to_lowercase();
        if self.default_machine_name.trim().is_empty() {
            self.default_machine_name = MachineDefaults::default().name;
        }
        if self.default_machine_city.trim().is_empty() {
            self.default_machine_city = MachineDefaults::default().city;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(path) = &self.seed_path {
            self.seed_path = Some(resolve_path(base, path));
        }
        if let Some(path) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.default_max_capacity == 0 {
            return Err(anyhow!("default_max_capacity must be greater than 0"));
        }
        if self.log_format != "text" && self.log_format != "json" {
            return Err(anyhow!(
                "log_format must be 'text' or 'json', got '{}'",
                self.log_format
            ));
        }
        if self.admin_username.is_some() != self.admin_password.is_some() {
            return Err(anyhow!(
                "admin_username and admin_password must be set together"
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            admin_username: self.admin_username.clone(),
            admin_password: self.admin_password.clone(),
            seed_path: self.seed_path.clone(),
            default_machine_name: self.default_machine_name.clone(),
            default_machine_city: self.default_machine_city.clone(),
            default_max_capacity: self.default_max_capacity,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("RVM_ADMIN_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("RVM_ADMIN_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("RVM_ADMIN_ADMIN_USERNAME") {
            self.admin_username = Some(value);
        }
        if let Ok(value) = env::var("RVM_ADMIN_ADMIN_PASSWORD") {
            self.admin_password = Some(value);
        }
        if let Ok(value) = env::var("RVM_ADMIN_SEED_PATH") {
            self.seed_path = Some(value);
        }
        if let Ok(value) = env::var("RVM_ADMIN_DEFAULT_MAX_CAPACITY") {
            self.default_max_capacity = value.parse().unwrap_or(self.default_max_capacity);
        }
        if let Ok(value) = env::var("RVM_ADMIN_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("RVM_ADMIN_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("RVM_ADMIN_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Ok(value) = env::var("RVM_ADMIN_LOG_FORMAT") {
            self.log_format = value;
        }
    }
}

fn drop_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("rvm-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = temp_dir();
        let config = AppConfig::load_from(dir.join("absent.toml"))
            .await
            .expect("load defaults");
        assert_eq!(config.bind_addr, "127.0.0.1:5001");
        assert_eq!(config.default_max_capacity, 100);
        assert!(config.loaded_from.is_none());
    }

    #[tokio::test]
    async fn file_values_are_normalized_and_resolved() {
        let dir = temp_dir();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
bind_addr = "0.0.0.0:8080"
api_token = "   "
seed_path = "seed.json"
default_max_capacity = 250
log_format = " JSON "
"#,
        )
        .expect("write config");
        let config = AppConfig::load_from(&path).await.expect("load config");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.api_token.is_none());
        assert_eq!(
            config.seed_path,
            Some(dir.join("seed.json").to_string_lossy().to_string())
        );
        assert_eq!(config.log_format, "json");
        assert_eq!(config.to_runtime_config().machine_defaults().max_capacity, 250);
        assert!(config.loaded_from.is_some());
    }

    #[test]
    fn validate_rejects_half_configured_login() {
        let config = AppConfig {
            admin_username: Some("polygreen".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let config = AppConfig {
            request_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        let config = AppConfig {
            max_body_bytes: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_bind_addr_and_capacity() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        let config = AppConfig {
            default_max_capacity: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
