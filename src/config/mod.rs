//! Watchdog configuration
//!
//! Every value the probe and launch steps need is carried here explicitly,
//! so tests can substitute endpoints and commands instead of relying on
//! process-wide defaults. Defaults match the deployed chatserver setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Validation errors for a loaded configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("port must be non-zero")]
    ZeroPort,

    #[error("probe timeout must be non-zero")]
    ZeroTimeout,

    #[error("server directory must not be empty")]
    EmptyServerDir,

    #[error("server binary must not be empty")]
    EmptyServerBin,
}

/// The server process to launch when the probe reports the port dead
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Working directory the server is started from
    pub dir: PathBuf,
    /// Server executable, resolved relative to `dir`
    pub bin: PathBuf,
    /// Arguments passed to the server
    pub args: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/root/chatbot"),
            bin: PathBuf::from("./chatserver"),
            args: vec!["/dev/null".to_string()],
        }
    }
}

/// Full watchdog configuration: probe endpoint plus launch command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Host the server is expected to listen on
    pub host: String,
    /// Port the server is expected to listen on
    pub port: u16,
    /// Probe connect timeout in seconds
    pub timeout_secs: u64,
    pub server: ServerConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            timeout_secs: 5,
            server: ServerConfig::default(),
        }
    }
}

impl WatchConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a partial file is fine.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: WatchConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from a file when one is given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check the configuration for values that can never work
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.server.dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyServerDir);
        }
        if self.server.bin.as_os_str().is_empty() {
            return Err(ConfigError::EmptyServerBin);
        }
        Ok(())
    }

    /// Probe connect timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
