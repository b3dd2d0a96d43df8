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

//! buildstamp - firmware build numbering
//!
//! Run once per build as a pre-build step. Each run increments the build
//! counter stored in `versioning` and regenerates `include/version.h` with
//! `BUILD_NUMBER`, `VERSION` and `VERSION_SHORT` defines.

pub mod clock;
pub mod config;
pub mod counter;
pub mod error;
pub mod header;
pub mod persist;
pub mod stamp;
pub mod version;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{StampConfig, load_config};
pub use counter::{BuildCounter, NextBuild};
pub use error::{CounterReadError, StampError};
pub use persist::WriteMode;
pub use stamp::{StampOutcome, Stamper, run};
pub use version::VersionDescriptor;
