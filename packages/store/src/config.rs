//! # Client configuration — `lessons.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # empty = same origin as the page
//!
//! [schedule]
//! start_hour = 6
//! end_hour = 22
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation, validation and the canonical filename. |
//! | [`ApiConfig`] | Where the REST API lives. |
//! | [`ScheduleConfig`] | First and last hour row of the weekly grid. |
//!
//! Missing sections fall back to their defaults, so an empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::schedule::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("schedule hours must satisfy 0 <= start_hour <= end_hour <= 23 (got {start}..={end})")]
    HourRange { start: u32, end: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            schedule: ScheduleConfig::default(),
        }
    }

    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.schedule = ScheduleConfig {
            start_hour,
            end_hour,
        };
        self
    }

    pub fn filename() -> &'static str {
        "lessons.toml"
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScheduleConfig {
            start_hour: start,
            end_hour: end,
        } = self.schedule;
        if start > end || end > 23 {
            return Err(ConfigError::HourRange { start, end });
        }
        Ok(())
    }

    /// Parse and validate.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
