//! Configuration model for the trimline booking core.

use serde::{Deserialize, Serialize};

use super::closure::ClosureType;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Horizon maintenance configuration.
    #[serde(default)]
    pub horizon: HorizonConfig,

    /// Waitlist configuration.
    #[serde(default)]
    pub waitlist: WaitlistConfig,

    /// Automatic closure rules applied by horizon maintenance.
    #[serde(default)]
    pub auto_closures: Vec<AutoClosureRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            horizon: HorizonConfig::default(),
            waitlist: WaitlistConfig::default(),
            auto_closures: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to the `SQLite` database file.
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    ".trimline/trimline.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Horizon maintenance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HorizonConfig {
    /// How many days ahead to keep schedules populated.
    #[serde(default = "default_horizon_days")]
    pub days: u32,
}

const fn default_horizon_days() -> u32 {
    60
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            days: default_horizon_days(),
        }
    }
}

/// Waitlist configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WaitlistConfig {
    /// How long a notified entry may occupy its position before expiry.
    #[serde(default = "default_notified_ttl_hours")]
    pub notified_ttl_hours: i64,
}

const fn default_notified_ttl_hours() -> i64 {
    24
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            notified_ttl_hours: default_notified_ttl_hours(),
        }
    }
}

/// One automatic closure rule, keyed by barber email.
///
/// Example: "marco is morning-closed every Monday" is
/// `{ barber_email: "marco@…", weekday: 1, closure_type: morning }`.
/// Omitting `weekday` applies the rule to every maintained day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AutoClosureRule {
    /// Email of the barber the rule applies to.
    pub barber_email: String,

    /// Weekday index (0 = Sunday … 6 = Saturday), or every day if absent.
    #[serde(default)]
    pub weekday: Option<u8>,

    /// Which part of the day to close.
    pub closure_type: ClosureType,

    /// Human-readable reason recorded on created closures.
    #[serde(default = "default_closure_reason")]
    pub reason: String,
}

fn default_closure_reason() -> String {
    "recurring closure".to_string()
}
