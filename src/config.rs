use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::NeedWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
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
fn default_port() -> u16 { 5000 }

/// Database settings; without a URL the service keeps records in memory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

impl DatabaseSettings {
    /// Configured database URL, ignoring a blank value
    pub fn connection_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_high_weight")]
    pub high: f64,
    #[serde(default = "default_medium_weight")]
    pub medium: f64,
    #[serde(default = "default_low_weight")]
    pub low: f64,
    #[serde(default = "default_income_scale")]
    pub income_scale: f64,
    #[serde(default = "default_homeless_bonus")]
    pub homeless_bonus: f64,
    #[serde(default = "default_amount_divisor")]
    pub amount_divisor: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            high: default_high_weight(),
            medium: default_medium_weight(),
            low: default_low_weight(),
            income_scale: default_income_scale(),
            homeless_bonus: default_homeless_bonus(),
            amount_divisor: default_amount_divisor(),
        }
    }
}

impl From<&ScoringSettings> for NeedWeights {
    fn from(settings: &ScoringSettings) -> Self {
        NeedWeights {
            high: settings.high,
            medium: settings.medium,
            low: settings.low,
            income_scale: settings.income_scale,
            homeless_bonus: settings.homeless_bonus,
            amount_divisor: settings.amount_divisor,
        }
    }
}

fn default_high_weight() -> f64 { 3.0 }
fn default_medium_weight() -> f64 { 2.0 }
fn default_low_weight() -> f64 { 1.0 }
fn default_income_scale() -> f64 { 10000.0 }
fn default_homeless_bonus() -> f64 { 1.0 }
fn default_amount_divisor() -> f64 { 10000.0 }

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
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHER__)
    /// 5. `PORT` and `DATABASE_URL`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_platform_overrides(settings)?;

        settings.try_deserialize()
    }

    pub fn need_weights(&self) -> NeedWeights {
        NeedWeights::from(&self.scoring)
    }
}

/// Apply the unprefixed `PORT` and `DATABASE_URL` variables on top of the
/// layered configuration
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let port = env::var("PORT").ok().and_then(|p| p.trim().parse::<u16>().ok());
    let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    builder.build()
}
