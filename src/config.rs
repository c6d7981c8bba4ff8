use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Embedded store location
    pub storage: StorageConfig,
    /// Simulated latency
    pub latency: LatencyConfig,
    /// Log output
    pub logging: LoggingConfig,
    /// JSON export
    pub export: ExportConfig,
}

/// Embedded store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the sled database
    pub path: String,
    /// Name of the sled tree holding the collection
    pub tree: String,
}

/// Simulated latency settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Whether delays are applied at all
    pub enabled: bool,
    /// Upper bound of a single delay
    pub max_delay_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
    /// Optional log file; enables the JSON file layer
    pub file_path: Option<String>,
    /// Console format, "json" or "text"
    pub format: String,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default export file
    pub output_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: ".contacts_db".to_string(),
                tree: "contacts".to_string(),
            },
            latency: LatencyConfig {
                enabled: true,
                max_delay_ms: 800,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            export: ExportConfig {
                output_path: "contacts-export.json".to_string(),
            },
        }
    }
}

const MAX_DELAY_LIMIT_MS: u64 = 10_000;

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .add_source(Config::try_from(&Self::default())?)
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("contacts").required(false))
            // Add environment variables with prefix, e.g. CONTACTS__STORAGE__PATH
            .add_source(Environment::with_prefix("CONTACTS").prefix_separator("__").separator("__"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.trim().is_empty() {
            return Err(anyhow::anyhow!("storage.path must not be empty"));
        }
        if self.storage.tree.trim().is_empty() {
            return Err(anyhow::anyhow!("storage.tree must not be empty"));
        }

        if self.latency.max_delay_ms > MAX_DELAY_LIMIT_MS {
            return Err(anyhow::anyhow!(
                "latency.max_delay_ms too large: {} (max {})",
                self.latency.max_delay_ms,
                MAX_DELAY_LIMIT_MS
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format,
                valid_formats
            ));
        }

        if self.export.output_path.trim().is_empty() {
            return Err(anyhow::anyhow!("export.output_path must not be empty"));
        }

        Ok(())
    }

    /// Get log level from environment or config
    #[must_use]
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.path, ".contacts_db");
        assert_eq!(config.storage.tree, "contacts");
        assert!(config.latency.enabled);
        assert_eq!(config.latency.max_delay_ms, 800);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.output_path, "contacts-export.json");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = AppConfig::default();
        config.storage.path = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.latency.max_delay_ms = 60_000;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
