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

//! One stamping run: bump the counter, then regenerate the header

use crate::clock::{Clock, SystemClock};
use crate::config::{StampConfig, load_config};
use crate::counter::BuildCounter;
use crate::error::Result;
use crate::header::{render, write_header};
use crate::version::VersionDescriptor;
use std::path::PathBuf;
use tracing::info;

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub version: VersionDescriptor,
    /// True when no previous build number could be read
    pub restarted: bool,
    pub counter_path: PathBuf,
    pub header_path: PathBuf,
}

impl StampOutcome {
    pub fn build_number(&self) -> u64 {
        self.version.build
    }
}

#[derive(Debug, Clone)]
pub struct Stamper<C: Clock> {
    config: StampConfig,
    clock: C,
}

impl Stamper<SystemClock> {
    pub fn new(config: StampConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Stamper<C> {
    pub fn with_clock(config: StampConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &StampConfig {
        &self.config
    }

    /// Increment the persisted counter and write the header for the new
    /// build. The counter is written first; if the header write then fails
    /// the counter keeps its new value.
    pub fn run(&self) -> Result<StampOutcome> {
        let mode = self.config.write_mode();
        let counter = BuildCounter::new(&self.config.counter_path).with_write_mode(mode);

        let next = counter.advance()?;
        let stamped_at = self.clock.now();
        let version = VersionDescriptor::new(
            self.config.major,
            self.config.minor,
            next.value(),
            stamped_at,
        );

        write_header(&self.config.header_path, &render(&version), mode)?;
        info!(
            "Wrote {} for {version}",
            self.config.header_path.display()
        );

        Ok(StampOutcome {
            version,
            restarted: next.is_restart(),
            counter_path: self.config.counter_path.clone(),
            header_path: self.config.header_path.clone(),
        })
    }
}

/// Stamp the build in the working directory with the default layout
/// (or `buildstamp.toml` when present) and the system clock.
pub fn run() -> Result<StampOutcome> {
    let config = load_config(None)?;
    Stamper::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::StampError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> StampConfig {
        StampConfig {
            counter_path: dir.path().join("versioning"),
            header_path: dir.path().join("include").join("version.h"),
            ..StampConfig::default()
        }
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 2, 3)
                .unwrap()
                .and_hms_micro_opt(11, 22, 33, 444_555)
                .unwrap(),
        )
    }

    #[test]
    fn test_run_continues_counter() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.counter_path, "41").unwrap();

        let outcome = Stamper::with_clock(config.clone(), clock()).run().unwrap();

        assert_eq!(outcome.build_number(), 42);
        assert!(!outcome.restarted);
        assert_eq!(
            std::fs::read_to_string(&config.counter_path).unwrap(),
            "42"
        );
        let header = std::fs::read_to_string(&config.header_path).unwrap();
        assert!(header.contains("#define BUILD_NUMBER \"42\""));
        assert!(header.contains("#define VERSION \"v1.3.260203 Build 42 - 2026-02-03 11:22:33.444555\""));
        assert!(header.contains("#define VERSION_SHORT \"v1.3.260203.42\""));
    }

    #[test]
    fn test_run_restarts_without_counter() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let outcome = Stamper::with_clock(config.clone(), clock()).run().unwrap();

        assert_eq!(outcome.build_number(), 1);
        assert!(outcome.restarted);
        assert_eq!(std::fs::read_to_string(&config.counter_path).unwrap(), "1");
    }

    #[test]
    fn test_run_uses_configured_version() {
        let dir = TempDir::new().unwrap();
        let config = StampConfig {
            major: 4,
            minor: 0,
            atomic_write: false,
            ..config_in(&dir)
        };

        let outcome = Stamper::with_clock(config, clock()).run().unwrap();

        assert_eq!(outcome.version.short(), "v4.0.260203");
        assert_eq!(outcome.version.to_string(), "v4.0.260203.1");
    }

    #[test]
    fn test_header_failure_keeps_new_counter() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::create_dir_all(&config.header_path).unwrap();
        std::fs::write(&config.counter_path, "9").unwrap();

        let err = Stamper::with_clock(config.clone(), clock())
            .run()
            .unwrap_err();

        assert!(matches!(err, StampError::HeaderWrite { .. }));
        assert_eq!(
            std::fs::read_to_string(&config.counter_path).unwrap(),
            "10"
        );
    }

    #[test]
    fn test_counter_failure_skips_header() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::create_dir_all(&config.counter_path).unwrap();

        let err = Stamper::with_clock(config.clone(), clock())
            .run()
            .unwrap_err();

        assert!(matches!(err, StampError::CounterWrite { .. }));
        assert!(!config.header_path.exists());
    }
}
