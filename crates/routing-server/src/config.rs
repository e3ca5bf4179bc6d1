//! Server configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `CALLHUB__` using `__` as the nesting
//! separator (`CALLHUB__PRESENCE__TTL_SECONDS=45`).

use std::net::SocketAddr;
use std::path::Path;

use callhub_routing_core::{RoutingSettings, StaticDirectory};
use chrono::Duration;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{Result, ServerError};
use crate::logging::parse_log_level;

pub const ENV_PREFIX: &str = "CALLHUB";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub presence: PresenceConfig,
    pub queue: QueueConfig,
    pub routing: RoutingConfig,
    /// Published numbers and the agents that answer them, in priority order
    pub directory: Vec<DirectoryEntry>,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Unbounded when absent
    pub max_per_number: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub bridge_webhook_url: String,
    pub queue_when_offline: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryEntry {
    pub number: String,
    #[serde(default)]
    pub agents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level for the routing crates; other targets stay at `warn`
    pub level: String,
    pub json: bool,
    /// Log every HTTP request at `level`
    pub http_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8090".to_string(),
            presence: PresenceConfig::default(),
            queue: QueueConfig::default(),
            routing: RoutingConfig::default(),
            directory: Vec::new(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self { ttl_seconds: 30 }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            bridge_webhook_url: RoutingSettings::default().bridge_webhook_url,
            queue_when_offline: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            http_requests: false,
        }
    }
}

impl ServerConfig {
    /// Load from an optional file plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        Self::finish(builder)
    }

    /// Load from TOML text plus the environment
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: ServerConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.presence.ttl_seconds == 0 {
            return Err(ServerError::config("presence.ttl_seconds must be greater than zero"));
        }
        if self.queue.max_per_number == Some(0) {
            return Err(ServerError::config("queue.max_per_number must be greater than zero"));
        }
        if self.routing.bridge_webhook_url.trim().is_empty() {
            return Err(ServerError::config("routing.bridge_webhook_url is empty"));
        }
        if let Some(entry) = self.directory.iter().find(|e| e.number.trim().is_empty()) {
            return Err(ServerError::config(format!(
                "directory entry with agents {:?} has no number",
                entry.agents
            )));
        }
        parse_log_level(&self.logging.level)?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .map_err(|e| ServerError::config(format!("bad bind_address '{}': {}", self.bind_address, e)))
    }

    pub fn routing_settings(&self) -> RoutingSettings {
        let ttl_seconds = i64::try_from(self.presence.ttl_seconds)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        RoutingSettings {
            bridge_webhook_url: self.routing.bridge_webhook_url.clone(),
            queue_when_offline: self.routing.queue_when_offline,
            presence_ttl: Duration::seconds(ttl_seconds),
            queue_capacity: self.queue.max_per_number,
        }
    }

    pub fn build_directory(&self) -> StaticDirectory {
        let mut directory = StaticDirectory::new();
        for entry in &self.directory {
            directory.insert(entry.number.clone(), entry.agents.iter().map(String::as_str));
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:8090");
        assert_eq!(config.presence.ttl_seconds, 30);
        assert_eq!(config.queue.max_per_number, None);
        assert!(!config.routing.queue_when_offline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_routing_settings_mapping() {
        let mut config = ServerConfig::default();
        config.presence.ttl_seconds = 45;
        config.queue.max_per_number = Some(3);
        config.routing.queue_when_offline = true;

        let settings = config.routing_settings();
        assert_eq!(settings.presence_ttl, Duration::seconds(45));
        assert_eq!(settings.queue_capacity, Some(3));
        assert!(settings.queue_when_offline);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.presence.ttl_seconds = 0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));

        let mut config = ServerConfig::default();
        config.queue.max_per_number = Some(0);
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.bind_address = "not-an-address".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.directory.push(DirectoryEntry {
            number: " ".to_string(),
            agents: vec!["alice".to_string()],
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_directory_keeps_agent_order() {
        use callhub_routing_core::{AgentDirectory, AgentIdentity};

        let mut config = ServerConfig::default();
        config.directory.push(DirectoryEntry {
            number: "+15550100".to_string(),
            agents: vec!["bob".to_string(), "alice".to_string()],
        });
        let directory = config.build_directory();
        assert_eq!(
            directory.agents_for_number("+15550100"),
            vec![AgentIdentity::from("bob"), AgentIdentity::from("alice")]
        );
    }
}
