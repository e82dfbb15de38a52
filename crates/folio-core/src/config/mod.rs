//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Folio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Technology badges rendered on the home page
    pub tech_stack: Vec<String>,
    /// Curated project ids surfaced on the home page, in display order
    pub featured_projects: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file override; defaults under the config directory
    pub database_path: Option<PathBuf>,
    /// Media root override; defaults under the config directory
    pub media_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            site: SiteConfig {
                tech_stack: vec![
                    "GOLANG".to_string(),
                    "PYTHON".to_string(),
                    "POSTGRESQL".to_string(),
                    "DOCKER".to_string(),
                    "REDIS".to_string(),
                    "SYSTEM DESIGN".to_string(),
                    "CI/CD".to_string(),
                    "PHP".to_string(),
                ],
                featured_projects: vec![1, 2],
            },
            storage: StorageConfig {
                database_path: None,
                media_dir: None,
            },
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(anyhow!("server.port must be non-zero"));
        }

        if self.site.tech_stack.iter().any(|t| t.trim().is_empty()) {
            return Err(anyhow!("site.tech_stack entries must not be empty"));
        }

        if self.site.featured_projects.iter().any(|id| *id <= 0) {
            return Err(anyhow!("site.featured_projects ids must be positive"));
        }

        Ok(())
    }

    /// Resolved database path (configured override or default location)
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(crate::storage::default_database_path)
    }

    /// Resolved media root (configured override or default location)
    pub fn media_dir(&self) -> PathBuf {
        self.storage
            .media_dir
            .clone()
            .unwrap_or_else(crate::media::default_media_root)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.site.featured_projects, vec![1, 2]);
        assert_eq!(config.site.tech_stack.len(), 8);
        assert!(config.site.tech_stack.contains(&"GOLANG".to_string()));
        assert!(config.storage.database_path.is_none());
        assert!(config.storage.media_dir.is_none());

        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).expect("Should serialize");
        let parsed: Config = toml::from_str(&serialized).expect("Should deserialize");

        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.site.featured_projects, config.site.featured_projects);
        assert_eq!(parsed.site.tech_stack, config.site.tech_stack);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_featured_ids() {
        let mut config = Config::default();
        config.site.featured_projects = vec![1, 0];
        assert!(config.validate().is_err());

        config.site.featured_projects = vec![-3];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr_format() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 9000;
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_storage_overrides_win() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/tmp/custom.db"));
        config.storage.media_dir = Some(PathBuf::from("/tmp/media"));

        assert_eq!(config.database_path(), PathBuf::from("/tmp/custom.db"));
        assert_eq!(config.media_dir(), PathBuf::from("/tmp/media"));
    }
}
