//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, catalog location,
//! log level and catalog strictness.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 3000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Catalog file; the embedded catalog is used when absent
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Reject catalogs with blocking audit issues at startup
    #[serde(default = "default_strict_catalog")]
    pub strict_catalog: bool,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_strict_catalog() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            catalog_path: None,
            log_level: default_log_level(),
            strict_catalog: default_strict_catalog(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        if config.bind_address.is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }

        Ok(config)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 3000);
        assert!(config.catalog_path.is_none());
        assert!(config.strict_catalog);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 8080
            catalog_path = "/srv/blomso/catalog.toml"
            log_level = "debug"
            strict_catalog = false
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("/srv/blomso/catalog.toml"))
        );
        assert_eq!(config.log_level, "debug");
        assert!(!config.strict_catalog);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_port, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file_rejects_empty_bind_address() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"\"").unwrap();

        let result = ServerConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::MissingField(field)) if field == "bind_address"));
    }
}
