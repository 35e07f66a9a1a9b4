use std::env;
use std::fmt;

use crate::drivers::screening::{
    FilterSelection, DEFAULT_APPEARANCE_FLOOR, DEFAULT_MIN_QUAL, DEFAULT_MIN_QUANT,
    DEFAULT_MIN_TOTAL, DEFAULT_ODOR_CEILING,
};
use crate::drivers::{Appearance, OdorLevel};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningDefaults,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            AppEnvironment::from_str(&lookup("APP_ENV").unwrap_or_else(|| "development".into()));
        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let screening = ScreeningDefaults {
            min_total: threshold(&lookup, "DRIVER_MIN_TOTAL", DEFAULT_MIN_TOTAL)?,
            min_quant: threshold(&lookup, "DRIVER_MIN_QUANT", DEFAULT_MIN_QUANT)?,
            min_qual: threshold(&lookup, "DRIVER_MIN_QUAL", DEFAULT_MIN_QUAL)?,
            odor_ceiling: match lookup("DRIVER_ODOR_CEILING") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidCategory {
                    key: "DRIVER_ODOR_CEILING",
                    value: raw,
                })?,
                None => DEFAULT_ODOR_CEILING,
            },
            appearance_floor: match lookup("DRIVER_APPEARANCE_FLOOR") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidCategory {
                    key: "DRIVER_APPEARANCE_FLOOR",
                    value: raw,
                })?,
                None => DEFAULT_APPEARANCE_FLOOR,
            },
        };

        Ok(Self {
            environment,
            screening,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn threshold<F>(lookup: &F, key: &'static str, default: u8) -> Result<u8, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidThreshold { key, value: raw }),
        None => Ok(default),
    }
}

/// Screening thresholds and hygiene limits an operator starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningDefaults {
    pub min_total: u8,
    pub min_quant: u8,
    pub min_qual: u8,
    pub odor_ceiling: OdorLevel,
    pub appearance_floor: Appearance,
}

impl ScreeningDefaults {
    /// A selection pre-filled with these defaults and every other filter off.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            min_total: self.min_total,
            min_quant: self.min_quant,
            min_qual: self.min_qual,
            odor_ceiling: self.odor_ceiling,
            appearance_floor: self.appearance_floor,
            ..FilterSelection::default()
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold { key: &'static str, value: String },
    InvalidCategory { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{key} must be an integer between 0 and 255 (found '{value}')")
            }
            ConfigError::InvalidCategory { key, value } => {
                write!(f, "{key} has unrecognised value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
