// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of buildstamp.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Configuration for a stamping run

use crate::counter::DEFAULT_COUNTER_PATH;
use crate::error::{Result, StampError};
use crate::header::DEFAULT_HEADER_PATH;
use crate::persist::WriteMode;
use crate::version::{DEFAULT_MAJOR, DEFAULT_MINOR};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Looked up in the working directory when no config file is given.
pub const CONFIG_FILE_NAME: &str = "buildstamp.toml";

fn default_counter_path() -> PathBuf {
    PathBuf::from(DEFAULT_COUNTER_PATH)
}

fn default_header_path() -> PathBuf {
    PathBuf::from(DEFAULT_HEADER_PATH)
}

fn default_major() -> u32 {
    DEFAULT_MAJOR
}

fn default_minor() -> u32 {
    DEFAULT_MINOR
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
    /// File holding the last build number
    #[serde(default = "default_counter_path")]
    pub counter_path: PathBuf,

    /// Generated C header
    #[serde(default = "default_header_path")]
    pub header_path: PathBuf,

    #[serde(default = "default_major")]
    pub major: u32,

    #[serde(default = "default_minor")]
    pub minor: u32,

    /// Replace outputs through a temp file and rename
    #[serde(default = "default_true")]
    pub atomic_write: bool,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            counter_path: default_counter_path(),
            header_path: default_header_path(),
            major: DEFAULT_MAJOR,
            minor: DEFAULT_MINOR,
            atomic_write: true,
        }
    }
}

impl StampConfig {
    /// Parse a TOML document. `origin` only labels errors.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| StampError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_atomic(self.atomic_write)
    }

    pub fn validate(&self) -> Result<()> {
        if self.counter_path.as_os_str().is_empty() {
            return Err(StampError::Config("counter_path must not be empty".into()));
        }
        if self.header_path.as_os_str().is_empty() {
            return Err(StampError::Config("header_path must not be empty".into()));
        }
        if self.counter_path == self.header_path {
            return Err(StampError::Config(format!(
                "counter_path and header_path both point to {}",
                self.counter_path.display()
            )));
        }
        Ok(())
    }
}

/// Load the run configuration.
///
/// An explicit file must exist. Without one, `buildstamp.toml` in the
/// working directory is used if present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<StampConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                debug!("No {CONFIG_FILE_NAME} found, using defaults");
                let config = StampConfig::default();
                config.validate()?;
                return Ok(config);
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| StampError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let config = StampConfig::from_toml(&content, &path)?;
    config.validate()?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}
