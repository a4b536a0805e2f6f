//! Service configuration resolution
//!
//! Bind address resolution follows the priority order:
//! 1. Explicit value (command-line argument or environment, highest)
//! 2. TOML config file (`mekd/config.toml` under the platform config dir)
//! 3. Compiled default (fallback)
//!
//! A missing config file falls through silently; a malformed one is a
//! configuration error.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5830;

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Resolve the configuration, applying explicit overrides (from the
    /// command line or environment) over the config file over the defaults.
    pub fn resolve(host_override: Option<String>, port_override: Option<u16>) -> Result<Self> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };

        if let Some(host) = host_override {
            config.host = host;
        }
        if let Some(port) = port_override {
            config.port = port;
        }

        Ok(config)
    }

    /// Load host/port from a TOML file, keeping defaults for absent keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: toml::Value = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::default();

        if let Some(host) = value.get("host").and_then(|v| v.as_str()) {
            config.host = host.to_string();
        }

        if let Some(port_value) = value.get("port") {
            config.port = port_value
                .as_integer()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| {
                    Error::Config(format!("invalid port in {}", path.display()))
                })?;
        }

        Ok(config)
    }

    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Platform config file location (`~/.config/mekd/config.toml` on Linux)
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mekd").join("config.toml"))
}
