use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.cmdrunner/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let cmdrunner_dir = home.join(".cmdrunner");

        if !cmdrunner_dir.exists() {
            fs::create_dir_all(&cmdrunner_dir).context("Failed to create .cmdrunner directory")?;
        }

        Self::load_or_init_at(&cmdrunner_dir.join("config.toml"))
    }

    /// Load the config at `config_path`, writing defaults there if it is missing.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let contents =
                fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
