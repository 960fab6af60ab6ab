//! Configuration loading with hierarchical merging.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid horizon days: {0}. Must be between 1 and 365")]
    InvalidHorizonDays(u32),

    #[error("Invalid notified TTL: {0}. Must be positive")]
    InvalidNotifiedTtl(i64),

    #[error("Invalid auto-closure weekday: {0}. Must be between 0 and 6")]
    InvalidRuleWeekday(u8),

    #[error("Auto-closure rule has an empty barber email")]
    EmptyRuleBarberEmail,
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `.trimline/config.yaml` (project config, created by init)
    /// 3. `.trimline/local.yaml` (local overrides, optional)
    /// 4. Environment variables (`TRIMLINE_*` prefix)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".trimline/config.yaml"))
            .merge(Yaml::file(".trimline/local.yaml"))
            .merge(Env::prefixed("TRIMLINE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context("Failed to extract configuration from file")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), ConfigError> {
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }

        if config.database.path.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.horizon.days == 0 || config.horizon.days > 365 {
            return Err(ConfigError::InvalidHorizonDays(config.horizon.days));
        }

        if config.waitlist.notified_ttl_hours <= 0 {
            return Err(ConfigError::InvalidNotifiedTtl(
                config.waitlist.notified_ttl_hours,
            ));
        }

        for rule in &config.auto_closures {
            if rule.barber_email.trim().is_empty() {
                return Err(ConfigError::EmptyRuleBarberEmail);
            }
            if let Some(weekday) = rule.weekday {
                if weekday > 6 {
                    return Err(ConfigError::InvalidRuleWeekday(weekday));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AutoClosureRule, ClosureType};

    #[test]
    fn default_config_is_valid() {
        ConfigLoader::validate(&Config::default()).expect("defaults validate");
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn out_of_range_rule_weekday_is_rejected() {
        let mut config = Config::default();
        config.auto_closures.push(AutoClosureRule {
            barber_email: "marco@example.com".to_string(),
            weekday: Some(7),
            closure_type: ClosureType::Morning,
            reason: "test".to_string(),
        });
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidRuleWeekday(7))
        ));
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let mut config = Config::default();
        config.horizon.days = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidHorizonDays(0))
        ));
    }
}
