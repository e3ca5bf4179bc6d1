//! Tracing subscriber for the server, driven by the `[logging]` section.
//!
//! The configured level applies to the routing crates only. Everything else
//! stays at `warn`, and the per-request spans from `tower_http` are shown
//! only when `http_requests` is on. A `RUST_LOG` in the environment replaces
//! the computed filter entirely.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogConfig;
use crate::error::{Result, ServerError};

const ROUTING_TARGETS: [&str; 2] = ["callhub_routing_core", "callhub_routing_server"];

pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level).map_err(|_| ServerError::config(format!("Invalid log level: {}", level)))
}

/// Filter directives for `config`, e.g.
/// `warn,callhub_routing_core=debug,callhub_routing_server=debug,tower_http=warn`
pub fn filter_directives(config: &LogConfig) -> Result<String> {
    let level = parse_log_level(&config.level)?.as_str().to_ascii_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(ROUTING_TARGETS.iter().map(|target| format!("{}={}", target, level)));
    let http = if config.http_requests { level.as_str() } else { "warn" };
    directives.push(format!("tower_http={}", http));
    Ok(directives.join(","))
}

fn env_filter(config: &LogConfig) -> Result<EnvFilter> {
    let directives = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => from_env,
        _ => filter_directives(config)?,
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| ServerError::Logging(format!("bad filter '{}': {}", directives, e)))
}

/// Install the global subscriber; fails if one is already set
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let builder = fmt().with_env_filter(env_filter(config)?).with_target(true);
    let installed = if config.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(|e| ServerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert!(matches!(parse_log_level("loud"), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_level_scopes_routing_crates() {
        let config = LogConfig {
            level: "DEBUG".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(
            filter_directives(&config).unwrap(),
            "warn,callhub_routing_core=debug,callhub_routing_server=debug,tower_http=warn"
        );
    }

    #[test]
    fn test_http_requests_follow_level() {
        let config = LogConfig {
            http_requests: true,
            ..LogConfig::default()
        };
        let directives = filter_directives(&config).unwrap();
        assert!(directives.ends_with(",tower_http=info"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_bad_level_is_a_config_error() {
        let config = LogConfig {
            level: "chatty".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(filter_directives(&config), Err(ServerError::Config(_))));
    }
}
