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

//! Persisted build counter
//!
//! The counter is a single decimal integer in a text file. Each stamping run
//! reads it once, bumps it in memory and writes it back once. Nothing locks
//! the file, so two runs racing on the same counter can lose an increment.

use crate::error::{CounterReadError, Result, StampError};
use crate::persist::{WriteMode, write_output};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_COUNTER_PATH: &str = "versioning";

/// Build number used when no previous value can be recovered.
pub const FIRST_BUILD: u64 = 1;

/// Where the next build number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextBuild {
    /// A previous value was read and incremented.
    Continued { previous: u64, next: u64 },
    /// Nothing usable was stored; numbering starts over at [`FIRST_BUILD`].
    Restarted,
}

impl NextBuild {
    pub fn value(self) -> u64 {
        match self {
            Self::Continued { next, .. } => next,
            Self::Restarted => FIRST_BUILD,
        }
    }

    pub fn is_restart(self) -> bool {
        matches!(self, Self::Restarted)
    }
}

#[derive(Debug, Clone)]
pub struct BuildCounter {
    path: PathBuf,
    mode: WriteMode,
}

impl BuildCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: WriteMode::default(),
        }
    }

    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored build number from the first line of the file.
    pub fn read(&self) -> std::result::Result<u64, CounterReadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CounterReadError::Missing(self.path.clone())
            } else {
                CounterReadError::Unreadable {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let first_line = content.lines().next().unwrap_or_default().trim();
        if first_line.is_empty() {
            return Err(CounterReadError::Empty(self.path.clone()));
        }

        first_line
            .parse::<u64>()
            .map_err(|_| CounterReadError::Malformed {
                path: self.path.clone(),
                content: first_line.to_owned(),
            })
    }

    /// Resolve the build number for this run. Never fails: every read
    /// problem, and a stored value that cannot be incremented, restarts
    /// numbering.
    pub fn next(&self) -> NextBuild {
        match self.read() {
            Ok(previous) => match previous.checked_add(1) {
                Some(next) => {
                    debug!("Previous build number: {previous}");
                    NextBuild::Continued { previous, next }
                }
                None => {
                    info!(
                        "Build counter {previous} is exhausted, starting build number from {FIRST_BUILD}"
                    );
                    NextBuild::Restarted
                }
            },
            Err(e) => {
                info!("{e}, starting build number from {FIRST_BUILD}");
                NextBuild::Restarted
            }
        }
    }

    /// Overwrite the counter file with `value`.
    pub fn persist(&self, value: u64) -> Result<()> {
        write_output(&self.path, &value.to_string(), self.mode).map_err(|source| {
            StampError::CounterWrite {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Resolve the next build number and store it.
    pub fn advance(&self) -> Result<NextBuild> {
        let next = self.next();
        self.persist(next.value())?;
        info!("Build number: {}", next.value());
        Ok(next)
    }
}

impl Default for BuildCounter {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_PATH)
    }
}
