use super::{GatewayConfig, ObservabilityConfig, RunnerConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.runner.validate()?;
        if self.gateway.host.trim().is_empty() {
            anyhow::bail!("gateway.host must not be empty");
        }
        crate::observability::parse_level(&self.observability.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.runner.timeout_secs, 10);
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn sections_parse_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [runner]
            allowed_commands = ["echo", "uptime"]
            timeout_secs = 3

            [gateway]
            host = "localhost"
            port = 7000

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.runner.allowed_commands, vec!["echo", "uptime"]);
        assert_eq!(config.runner.timeout_secs, 3);
        assert_eq!(config.gateway.host, "localhost");
        assert_eq!(config.gateway.port, 7000);
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = Config::default();
        config.observability.log_level = "loud".into();
        assert!(config.validate().is_err());
    }
}
