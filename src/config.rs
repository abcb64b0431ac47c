use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::AgeRange;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub sweep: SweepSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_session_ttl() -> u64 { 1800 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SweepSettings {
    #[serde(default = "default_sweep_min_age")]
    pub min_age: u8,
    #[serde(default = "default_sweep_max_age")]
    pub max_age: u8,
}

impl SweepSettings {
    pub fn range(&self) -> AgeRange {
        AgeRange::new(self.min_age, self.max_age)
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            min_age: default_sweep_min_age(),
            max_age: default_sweep_max_age(),
        }
    }
}

fn default_sweep_min_age() -> u8 { AgeRange::default().min }
fn default_sweep_max_age() -> u8 { AgeRange::default().max }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LOVE)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LOVE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("LOVE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
