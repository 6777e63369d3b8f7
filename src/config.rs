use std::env;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "ALBUMS";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub directory: DirectorySection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `ALBUMS_CONFIG` and defaults to `config.toml`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ALBUMS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Load configuration from the given file (skipped when absent), then
    /// apply `ALBUMS_*` environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the address the HTTP server binds to.
    pub fn listen_addr(&self) -> Result<String> {
        let host = self.server.host.trim();
        if host.is_empty() {
            bail!("server.host must be specified");
        }

        Ok(format!("{}:{}", host, self.server.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectorySection {
    /// Start with the built-in albums instead of an empty directory
    pub seed: bool,
}

impl Default for DirectorySection {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
