mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BodaError;
use crate::messages::Catalog;
use defaults::*;

/// Top-level site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for daily-rolled log files. Empty = stdout only.
    #[serde(default)]
    pub log_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_dir: String::new(),
        }
    }
}

/// HTTP listener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Translation sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Directory holding `es.json` / `eus.json` overrides. Empty = bundled catalogs.
    #[serde(default)]
    pub messages_dir: String,
}

impl I18nConfig {
    /// Load the catalog this config points at.
    pub fn catalog(&self) -> Result<Catalog, BodaError> {
        if self.messages_dir.is_empty() {
            return Catalog::embedded();
        }
        let dir = PathBuf::from(shellexpand(&self.messages_dir));
        if !dir.is_dir() {
            return Err(BodaError::Config(format!(
                "messages_dir {} is not a directory",
                dir.display()
            )));
        }
        Catalog::load_dir(dir)
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, BodaError> {
    match read(path)? {
        Some(config) => Ok(config),
        None => {
            tracing::info!("Config file not found at {path}, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse the TOML file at `path`, or `None` if there is no such file.
///
/// Does not log, so it can run before the subscriber is installed.
pub fn read(path: &str) -> Result<Option<Config>, BodaError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BodaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| BodaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(Some(config))
}
