use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_OCCURRENCES;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address to bind in the format "host:port".
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Cap on the occurrences expanded from one series.
    pub max_occurrences: u16,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8697)?
            .set_default("logging.level", "debug")?
            .set_default("calendar.max_occurrences", i64::from(DEFAULT_MAX_OCCURRENCES))?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "No .env file loaded");
    }

    Settings::load()
}
