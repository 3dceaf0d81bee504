use crate::core::timezone::{DisplayZone, IST_OFFSET_MINUTES};
use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub mod api;
pub mod endpoints;

pub use api::ApiConfig;
pub use endpoints::{EntityRouteOverride, RouteOverrides};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub endpoints: RouteOverrides,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Logging and environment settings only
    ///
    /// Needs no API settings, so the subscriber can be installed before the rest of the
    /// configuration (and the route override file) is loaded.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(AppConfig {
            env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Configuration(format!(
                "Invalid LOG_FORMAT '{}' (expected pretty or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Offset east of UTC used to render deletion times
    pub utc_offset_minutes: i32,
}

impl DisplayConfig {
    pub fn zone(&self) -> Result<DisplayZone> {
        DisplayZone::from_offset_minutes(self.utc_offset_minutes).map_err(AppError::Configuration)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoints = match lookup("SEVADESK_ENDPOINTS_FILE").filter(|p| !p.trim().is_empty()) {
            Some(path) => RouteOverrides::load(PathBuf::from(path))?,
            None => RouteOverrides::default(),
        };

        let config = Config {
            app: AppConfig::from_lookup(&lookup)?,
            api: ApiConfig::from_lookup(&lookup)?,
            display: DisplayConfig {
                utc_offset_minutes: lookup("SEVADESK_DISPLAY_UTC_OFFSET_MINUTES")
                    .unwrap_or_else(|| IST_OFFSET_MINUTES.to_string())
                    .trim()
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration(
                            "Invalid SEVADESK_DISPLAY_UTC_OFFSET_MINUTES".to_string(),
                        )
                    })?,
            },
            endpoints,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.display.zone()?;
        Ok(())
    }
}
