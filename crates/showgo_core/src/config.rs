//! Runtime configuration from the process environment.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are errors.
//! - The log level is stored normalized (`trace|debug|info|warn|error`).

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "SHOWGO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "SHOWGO_LOG_DIR";
pub const ENV_SEED: &str = "SHOWGO_SEED";

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// Populate the store with the sample events at start.
    pub seed_sample_events: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_events: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(LoggingError),
    RelativeLogDir(String),
    InvalidBool { var: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(err) => write!(f, "{ENV_LOG_LEVEL}: {err}"),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidBool { var, value } => {
                write!(f, "{var} must be true|false|1|0, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.set_log_level(&level)?;
        }
        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            config.set_log_dir(&dir)?;
        }
        if let Some(seed) = non_blank(lookup(ENV_SEED)) {
            config.seed_sample_events = parse_bool(ENV_SEED, &seed)?;
        }

        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    ///
    /// `None` keeps the current value; `no_seed` only ever disables seeding.
    pub fn apply_overrides(
        &mut self,
        log_level: Option<&str>,
        log_dir: Option<&str>,
        no_seed: bool,
    ) -> Result<(), ConfigError> {
        if let Some(level) = log_level {
            self.set_log_level(level)?;
        }
        if let Some(dir) = log_dir {
            self.set_log_dir(dir)?;
        }
        if no_seed {
            self.seed_sample_events = false;
        }
        Ok(())
    }

    /// Overrides the log level, normalizing it.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        Ok(())
    }

    /// Overrides the log directory; it must be absolute.
    pub fn set_log_dir(&mut self, dir: &str) -> Result<(), ConfigError> {
        let path = PathBuf::from(dir.trim());
        if !path.is_absolute() {
            return Err(ConfigError::RelativeLogDir(dir.to_string()));
        }
        self.log_dir = Some(path);
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", " TRUE ").unwrap());
        assert!(parse_bool("X", "on").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}
