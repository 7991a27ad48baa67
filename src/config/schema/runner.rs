use crate::runner::{DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_TIMEOUT_SECS};
use crate::security::default_allowed_commands;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Verbs that may be executed; replaces the built-in list when set.
    #[serde(default = "default_allowed_commands")]
    pub allowed_commands: Vec<String>,
    /// Wall-clock timeout per command (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Captured bytes kept per stream (default: 1 MB)
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_output_bytes() -> usize {
    DEFAULT_MAX_OUTPUT_BYTES
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            allowed_commands: default_allowed_commands(),
            timeout_secs: default_timeout_secs(),
            max_output_bytes: default_max_output_bytes(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("runner.timeout_secs must be >= 1");
        }
        if self.max_output_bytes == 0 {
            anyhow::bail!("runner.max_output_bytes must be >= 1");
        }
        if self.allowed_commands.is_empty() {
            anyhow::bail!("runner.allowed_commands must not be empty");
        }
        if let Some(bad) = self.allowed_commands.iter().find(|verb| {
            verb.is_empty() || verb.contains('/') || verb.contains(char::is_whitespace)
        }) {
            anyhow::bail!("runner.allowed_commands entry {bad:?} must be a bare program name");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_policy() {
        let config = RunnerConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_output_bytes, 1_048_576);
        assert_eq!(config.allowed_commands.len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = RunnerConfig {
            timeout_secs: 0,
            ..RunnerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        let config = RunnerConfig {
            allowed_commands: Vec::new(),
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn path_or_spaced_entries_are_rejected() {
        for bad in ["/bin/ls", "ls -la", ""] {
            let config = RunnerConfig {
                allowed_commands: vec![bad.to_string()],
                ..RunnerConfig::default()
            };
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: RunnerConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.allowed_commands.iter().any(|v| v == "whoami"));
    }
}
