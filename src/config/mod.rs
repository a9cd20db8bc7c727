use std::env;
use std::fmt;

use crate::workflows::complaints::IntakePolicy;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the intake engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub intake: IntakePolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            intake: load_intake_policy()?,
        })
    }
}

/// Intake policy dials, read from the environment with the documented
/// defaults (100 m duplicate radius, 250 m density radius, brackets at 3
/// and 6 nearby reports).
fn load_intake_policy() -> Result<IntakePolicy, ConfigError> {
    let defaults = IntakePolicy::default();

    Ok(IntakePolicy {
        duplicate_radius_meters: env_f64(
            "INTAKE_DUPLICATE_RADIUS_M",
            defaults.duplicate_radius_meters,
        )?,
        density_radius_meters: env_f64("INTAKE_DENSITY_RADIUS_M", defaults.density_radius_meters)?,
        high_priority_threshold: env_u32(
            "INTAKE_HIGH_PRIORITY_THRESHOLD",
            defaults.high_priority_threshold,
        )?,
        medium_priority_threshold: env_u32(
            "INTAKE_MEDIUM_PRIORITY_THRESHOLD",
            defaults.medium_priority_threshold,
        )?,
    })
}

fn env_f64(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

fn env_u32(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a plain non-negative number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
