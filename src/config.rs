use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "PFM_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the panel, e.g. https://panel.example.com
    pub panel_url: String,
    /// Client API key (ptlc_...)
    pub api_key: String,
    /// Server identifier opened when none is given on the command line
    pub default_server: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel_url: String::new(),
            api_key: String::new(),
            default_server: None,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.panel_url.trim().is_empty() {
            bail!("panel_url is not set");
        }
        if !self.panel_url.starts_with("http://") && !self.panel_url.starts_with("https://") {
            bail!("panel_url must start with http:// or https://");
        }
        if self.api_key.trim().is_empty() {
            bail!("api_key is not set (or export {})", API_KEY_ENV);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ConfigManager {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pfm");

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let config_file = config_dir.join("pfm.toml");
        Ok(Self {
            config_dir,
            config_file,
        })
    }

    /// Use an explicit config file instead of the default location.
    pub fn from_path(config_file: impl Into<PathBuf>) -> Self {
        let config_file = config_file.into();
        let config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            config_dir,
            config_file,
        }
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        // If config file doesn't exist, create it with default values
        if !self.config_file.exists() {
            tracing::info!("Writing default config to {:?}", self.config_file);
            self.save_config(&AppConfig::default())?;
        }

        let content =
            fs::read_to_string(&self.config_file).context("Failed to read config file")?;

        let mut config: AppConfig =
            toml::from_str(&content).context("Failed to parse config file")?;

        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            if !api_key.is_empty() {
                config.api_key = api_key;
            }
        }

        config.panel_url = config.panel_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let toml = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_file, toml).context("Failed to write config file")?;
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_file
    }

    pub fn log_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}
