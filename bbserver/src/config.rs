use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Server configuration, loaded from a TOML file with sensible defaults
/// when no file is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Simulated per-endpoint response latency. Turned off for tests.
    pub latency: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { latency: true }
    }
}

impl Config {
    /// Load configuration from `BBSERVER_CONFIG`, falling back to well-known
    /// paths and finally to the built-in defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("BBSERVER_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        let candidates = [
            PathBuf::from("bbserver.toml"),
            PathBuf::from("config/bbserver.toml"),
        ];
        for path in &candidates {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert!(config.mock.latency);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.mock.latency);
    }

    #[test]
    fn latency_can_be_disabled() {
        let config: Config = toml::from_str("[mock]\nlatency = false\n").unwrap();
        assert!(!config.mock.latency);
    }
}
