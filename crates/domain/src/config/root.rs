use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::servers::default_servers;
use super::whois::WhoisConfig;
use crate::WhoisServer;

const LOCAL_CONFIG_PATH: &str = "ferrous-whois.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-whois/config.toml";

/// Main configuration structure for Ferrous WHOIS
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Query behaviour (timeouts, referral depth)
    #[serde(default)]
    pub whois: WhoisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registry endpoints, one entry per zone
    #[serde(default = "default_servers")]
    pub servers: Vec<WhoisServer>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whois: WhoisConfig::default(),
            logging: LoggingConfig::default(),
            servers: default_servers(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-whois.toml in current directory
    /// 3. /etc/ferrous-whois/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_zones();
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.whois.timeout_secs = timeout;
        }
    }

    fn normalize_zones(&mut self) {
        for server in &mut self.servers {
            server.zone = crate::zone::normalize_zone(&server.zone);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whois.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No whois servers configured".to_string(),
            ));
        }

        for server in &self.servers {
            server.validate().map_err(ConfigError::Validation)?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub timeout_secs: Option<u64>,
}
