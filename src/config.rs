//! Runtime configuration read from the environment (and `.env`).

use crate::error::{Error, Result};
use std::str::FromStr;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_LOG_CONFIG: &str = "IPV4DB_LOG_CONFIG";
pub const ENV_SAMPLE_DATA: &str = "IPV4DB_SAMPLE_DATA";
pub const ENV_OUTPUT: &str = "IPV4DB_OUTPUT";

/// Report format for search results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<OutputFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "{ENV_OUTPUT} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Seed the registry with the sample organizations.
    pub sample_data: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            sample_data: true,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }
        if let Some(flag) = lookup(ENV_SAMPLE_DATA) {
            config.sample_data = parse_flag(ENV_SAMPLE_DATA, &flag)?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        log::debug!("config={config:?}");
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
