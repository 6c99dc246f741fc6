//! Session configuration from environment variables.

use thiserror::Error;

use fridgekeeper_kitchen::DEFAULT_ALERT_WINDOW_DAYS;

pub const ALERT_DAYS_VAR: &str = "FRIDGEKEEPER_ALERT_DAYS";
pub const SEED_VAR: &str = "FRIDGEKEEPER_SEED";
pub const PET_NAME_VAR: &str = "FRIDGEKEEPER_PET_NAME";

const DEFAULT_PET_NAME: &str = "N'Tao";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative whole number of days (got {value:?})")]
    InvalidAlertDays { key: &'static str, value: String },

    #[error("{key} must be true or false (got {value:?})")]
    InvalidFlag { key: &'static str, value: String },

    #[error("{key} cannot be blank")]
    Blank { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Items this many whole days from expiry (or closer) raise a notification.
    pub alert_window_days: i64,
    /// Start the session with the starter inventory.
    pub seed_sample_data: bool,
    pub pet_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            alert_window_days: DEFAULT_ALERT_WINDOW_DAYS,
            seed_sample_data: true,
            pet_name: DEFAULT_PET_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup(ALERT_DAYS_VAR) {
            Some(raw) => {
                config.alert_window_days = raw
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|days| *days >= 0)
                    .ok_or(ConfigError::InvalidAlertDays {
                        key: ALERT_DAYS_VAR,
                        value: raw,
                    })?;
            }
            None => warn_default(ALERT_DAYS_VAR, config.alert_window_days),
        }

        match lookup(SEED_VAR) {
            Some(raw) => config.seed_sample_data = parse_flag(SEED_VAR, &raw)?,
            None => warn_default(SEED_VAR, config.seed_sample_data),
        }

        match lookup(PET_NAME_VAR) {
            Some(raw) => {
                let name = raw.trim();
                if name.is_empty() {
                    return Err(ConfigError::Blank { key: PET_NAME_VAR });
                }
                config.pet_name = name.to_string();
            }
            None => warn_default(PET_NAME_VAR, &config.pet_name),
        }

        Ok(config)
    }
}

fn warn_default(key: &str, default: impl core::fmt::Display) {
    tracing::warn!("{} not set; using default {}", key, default);
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
