use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::storage::StorageBackendKind;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "WEBSERVICE";

const DEFAULT_PORT: u16 = 9876;

/// Top-level application configuration loaded from file + environment.
///
/// Resolved once at start-up and handed to the components that need it.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub mode: RunMode,
    pub server: ServerConfig,
    pub storage: StorageSection,
    pub health: HealthSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and the process environment.
    pub fn load() -> Result<Self> {
        let vars: HashMap<String, String> = env::vars().collect();
        let config_path = vars
            .get(&format!("{ENV_PREFIX}_CONFIG"))
            .cloned()
            .unwrap_or_else(|| "config.toml".to_string());

        Self::load_from(Some(Path::new(&config_path)), vars)
    }

    /// Load configuration from an optional TOML file and an explicit set of
    /// environment variables.
    ///
    /// `WEBSERVICE_`-prefixed variables use `__` to reach nested keys
    /// (`WEBSERVICE_SERVER__PORT`). A bare `PORT` is applied last.
    pub fn load_from(config_path: Option<&Path>, vars: HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path.filter(|p| p.exists()) {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone().into_iter().collect())),
        );

        let settings = builder.build().context("failed to read configuration")?;
        let mut config: Self = settings
            .try_deserialize()
            .context("invalid configuration value")?;

        if let Some(port) = vars.get("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value: {port:?}"))?;
        }

        Ok(config)
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log filter directive, falling back to a mode-dependent default.
    pub fn log_level(&self) -> String {
        let level = self.logging.level.trim();
        if !level.is_empty() {
            return level.to_string();
        }

        match self.mode {
            RunMode::Release => "info".to_string(),
            RunMode::Debug => "webservice=debug,tower_http=debug".to_string(),
            RunMode::Test => "warn".to_string(),
        }
    }

    /// Log output format, falling back to JSON in release mode only.
    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or(match self.mode {
            RunMode::Release => LogFormat::Json,
            RunMode::Debug | RunMode::Test => LogFormat::Text,
        })
    }
}

/// Process run mode
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Release,
    Debug,
    Test,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Answer CORS preflights for any origin
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageSection {
    pub backend: StorageBackendKind,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HealthSection {
    /// Have the readiness probe ping the store
    pub check_store: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Text,
}
