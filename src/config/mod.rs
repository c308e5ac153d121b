//! Configuration management.

mod file_config;

pub use file_config::ConfigFileError;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::DEFAULT_PAGE_SIZE;

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "course-glossary.toml";

/// Prefix of environment variable overrides (`COURSE_GLOSSARY_GLOSSARY__PAGE_SIZE=50`)
pub const ENV_PREFIX: &str = "COURSE_GLOSSARY";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Term service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Base URLs for outbound links
    #[serde(default)]
    pub links: LinksConfig,

    /// Glossary view settings
    #[serde(default)]
    pub glossary: GlossaryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Term service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the key terms API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per fetch, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:18500".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

/// Link base URL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Learning app serving lesson pages
    #[serde(default = "default_learning_base_url")]
    pub learning_base_url: String,

    /// LMS serving textbook assets
    #[serde(default = "default_lms_base_url")]
    pub lms_base_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            learning_base_url: default_learning_base_url(),
            lms_base_url: default_lms_base_url(),
        }
    }
}

fn default_learning_base_url() -> String {
    "http://localhost:2000".to_string()
}

fn default_lms_base_url() -> String {
    "http://localhost:18000".to_string()
}

/// Glossary view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryConfig {
    /// Terms per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether the module filter facet is offered
    #[serde(default = "default_true")]
    pub module_filter_enabled: bool,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            module_filter_enabled: true,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` for structured output, anything else for text
    #[serde(default)]
    pub format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Get the configuration from environment overrides and defaults
pub fn get_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}

/// Find a config file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("course-glossary").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}
