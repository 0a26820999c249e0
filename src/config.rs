//! Tunable parameters of the form, loaded from a JSON file

use std::{
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::{Path, PathBuf},
};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::constants::{DEFAULT_LOG_FILE, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid username bounds: {min}..={max}")]
    InvalidBounds { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub username_min: usize,
    pub username_max: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            username_min: MIN_USERNAME_LENGTH,
            username_max: MAX_USERNAME_LENGTH,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl FormConfig {
    /// Reads the configuration at `path`. Returns None when the file does
    /// not exist, leaving the caller to fall back to the defaults.
    pub fn open(path: &Path) -> Result<Option<Self>, ConfigError> {
        match File::open(path) {
            Ok(f) => {
                let config: Self = serde_json::from_reader(f)?;
                config.validate()?;
                Ok(Some(config))
            }

            Err(not_found) if not_found.kind() == NotFound => Ok(None),

            Err(other) => Err(other.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.username_min == 0 || self.username_min > self.username_max {
            return Err(ConfigError::InvalidBounds {
                min: self.username_min,
                max: self.username_max,
            });
        }
        Ok(())
    }
}
