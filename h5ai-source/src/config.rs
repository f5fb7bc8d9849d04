use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub logging: LoggingConfig,
}

/// Fixed description of one h5ai server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Root of the server-exposed tree
    pub base_url: String,
    /// Human-readable source name
    pub name: String,
    /// Language tag of the content
    pub lang: String,
    /// Whether the server can list recently updated folders
    pub supports_latest: bool,
    /// Read timeout for listing requests
    pub read_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://server5.ftpbd.net/FTP-5/Anime--Cartoon-TV-Series".to_string(),
            name: "h5ai (Custom)".to_string(),
            lang: "en".to_string(),
            supports_latest: false,
            read_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        builder.add_source(env_source()).build()?.try_deserialize()
    }

    /// Load from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }
}

/// Environment overrides: H5AI_SOURCE__BASE_URL, H5AI_LOGGING__LEVEL, ...
fn env_source() -> Environment {
    Environment::with_prefix("H5AI")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
