//! Process configuration.
//!
//! The defaults are the values this application has always run with: the
//! database file `./myapp.db`, the `Tokyo` time zone and local-time
//! timestamps. Each can be overridden from the environment (or a `.env`
//! file):
//!
//! | Variable                 | Meaning                                 |
//! |--------------------------|-----------------------------------------|
//! | `MYAPP_DATABASE`         | SQLite file path, or `:memory:`         |
//! | `MYAPP_TIME_ZONE`        | IANA name or a friendly city name       |
//! | `MYAPP_DEFAULT_TIMEZONE` | `local` or `utc`                        |
//! | `MYAPP_SQL_LOG`          | `true` / `false`, log every statement   |

use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_DATABASE: &str = "./myapp.db";
pub const DEFAULT_TIME_ZONE: &str = "Tokyo";
pub const MEMORY_DATABASE: &str = ":memory:";

const ENV_DATABASE: &str = "MYAPP_DATABASE";
const ENV_TIME_ZONE: &str = "MYAPP_TIME_ZONE";
const ENV_DEFAULT_TIMEZONE: &str = "MYAPP_DEFAULT_TIMEZONE";
const ENV_SQL_LOG: &str = "MYAPP_SQL_LOG";

/// How naive timestamp columns are written and read back
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TimestampMode {
    /// Civil time in UTC
    Utc,
    /// Civil time in the configured default zone
    #[default]
    Local,
}

impl FromStr for TimestampMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            other => Err(Error::Config(format!(
                "unknown timestamp mode '{other}', expected 'local' or 'utc'"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    pub time_zone: String,
    pub default_timezone: TimestampMode,
    pub sql_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_owned(),
            time_zone: DEFAULT_TIME_ZONE.to_owned(),
            default_timezone: TimestampMode::Local,
            sql_log: true,
        }
    }
}

impl Config {
    /// Defaults, overridden by the process environment and `.env`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(database) = lookup(ENV_DATABASE) {
            if database.trim().is_empty() {
                return Err(Error::Config(format!("{ENV_DATABASE} is empty")));
            }
            config.database = database;
        }
        if let Some(time_zone) = lookup(ENV_TIME_ZONE) {
            config.time_zone = time_zone;
        }
        if let Some(mode) = lookup(ENV_DEFAULT_TIMEZONE) {
            config.default_timezone = mode.parse()?;
        }
        if let Some(flag) = lookup(ENV_SQL_LOG) {
            config.sql_log = parse_flag(ENV_SQL_LOG, &flag)?;
        }

        Ok(config)
    }

    pub fn with_database<S: Into<String>>(mut self, database: S) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_time_zone<S: Into<String>>(mut self, time_zone: S) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    /// `:memory:` selects a private in-memory database instead of a file
    pub fn is_memory(&self) -> bool {
        self.database == MEMORY_DATABASE
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("{key}: '{other}' is not a boolean"))),
    }
}
