use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::OutputFormat;

pub mod request;

pub use request::{ProxyAuth, ProxyConfig, TranscriptConfig};

/// Settings read by the command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language requested when `--lang` is not given
    pub default_language: Option<String>,

    /// Proxy used when `--proxy` is not given
    pub proxy: Option<ProxyConfig>,

    /// Timeout for each HTTP request in seconds
    pub timeout_secs: u64,

    /// Output format used when `--format` is not given
    pub default_output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: None,
            proxy: None,
            timeout_secs: 30,
            default_output_format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, the default location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else if path.is_some() {
            anyhow::bail!("Config file does not exist: {}", config_path.display());
        } else {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).context("Failed to read config file")?;

        let config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs_err::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs_err::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("yt-transcript").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        if let Some(proxy) = &self.proxy {
            if proxy.host.trim().is_empty() {
                anyhow::bail!("proxy.host must not be empty");
            }
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!(
            "  Default Language: {}",
            self.default_language.as_deref().unwrap_or("(first available track)")
        );
        match &self.proxy {
            Some(proxy) => {
                println!("  Proxy: {}", proxy.host);
                if let Some(auth) = &proxy.auth {
                    println!("  Proxy User: {}", auth.username);
                }
            }
            None => println!("  Proxy: (none)"),
        }
        println!("  Timeout: {}s", self.timeout_secs);
        println!("  Default Format: {}", self.default_output_format);
    }

    /// Request options derived from these settings
    pub fn transcript_config(&self) -> TranscriptConfig {
        TranscriptConfig {
            language: self.default_language.clone(),
            proxy: self.proxy.clone(),
            http_client: None,
            timeout: Some(Duration::from_secs(self.timeout_secs)),
        }
    }
}
