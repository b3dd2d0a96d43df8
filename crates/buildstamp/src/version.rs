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

//! Version descriptor and its string forms

use chrono::{Datelike, NaiveDateTime};
use std::fmt;

pub const DEFAULT_MAJOR: u32 = 1;
pub const DEFAULT_MINOR: u32 = 3;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Everything the header says about one build.
///
/// `stamped_at` is read from the clock once, so the date in the short
/// version and the full timestamp always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    pub major: u32,
    pub minor: u32,
    pub build: u64,
    pub stamped_at: NaiveDateTime,
}

impl VersionDescriptor {
    pub fn new(major: u32, minor: u32, build: u64, stamped_at: NaiveDateTime) -> Self {
        Self {
            major,
            minor,
            build,
            stamped_at,
        }
    }

    /// Two-digit year followed by zero-padded month and day, e.g. `260105`.
    pub fn date_tag(&self) -> String {
        let year = self.stamped_at.year().rem_euclid(100);
        format!(
            "{year:02}{:02}{:02}",
            self.stamped_at.month(),
            self.stamped_at.day()
        )
    }

    /// `v<major>.<minor>.<YYMMDD>`
    pub fn short(&self) -> String {
        format!("v{}.{}.{}", self.major, self.minor, self.date_tag())
    }

    /// Short version followed by the literal ` Build `.
    pub fn long_prefix(&self) -> String {
        format!("{} Build ", self.short())
    }

    pub fn timestamp(&self) -> String {
        self.stamped_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `<short> Build <build> - <timestamp>`
    pub fn long(&self) -> String {
        format!("{}{} - {}", self.long_prefix(), self.build, self.timestamp())
    }

    /// `<short>.<build>`
    pub fn short_with_build(&self) -> String {
        format!("{}.{}", self.short(), self.build)
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_with_build())
    }
}
