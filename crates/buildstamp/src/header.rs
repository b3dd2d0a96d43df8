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

//! C header rendering

use crate::error::{Result, StampError};
use crate::persist::{WriteMode, write_output};
use crate::version::VersionDescriptor;
use std::fmt::Write;
use std::path::Path;

pub const DEFAULT_HEADER_PATH: &str = "include/version.h";

pub const BUILD_NUMBER: &str = "BUILD_NUMBER";
pub const VERSION: &str = "VERSION";
pub const VERSION_SHORT: &str = "VERSION_SHORT";

/// Append a string macro that yields to any earlier definition.
fn push_guarded_define(out: &mut String, name: &str, value: &str) {
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "#ifndef {name}\n  #define {name} \"{value}\"\n#endif\n"
    );
}

/// Render the header for one build.
pub fn render(version: &VersionDescriptor) -> String {
    let mut out = String::from("\n");
    push_guarded_define(&mut out, BUILD_NUMBER, &version.build.to_string());
    push_guarded_define(&mut out, VERSION, &version.long());
    push_guarded_define(&mut out, VERSION_SHORT, &version.short_with_build());
    out
}

pub fn write_header(path: &Path, contents: &str, mode: WriteMode) -> Result<()> {
    write_output(path, contents, mode).map_err(|source| StampError::HeaderWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn descriptor(build: u64) -> VersionDescriptor {
        let stamped_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_micro_opt(14, 5, 9, 250_000)
            .unwrap();
        VersionDescriptor::new(1, 3, build, stamped_at)
    }

    #[test]
    fn test_render_exact_layout() {
        let expected = "
#ifndef BUILD_NUMBER
  #define BUILD_NUMBER \"42\"
#endif
#ifndef VERSION
  #define VERSION \"v1.3.261018 Build 42 - 2026-10-18 14:05:09.250000\"
#endif
#ifndef VERSION_SHORT
  #define VERSION_SHORT \"v1.3.261018.42\"
#endif
";
        assert_eq!(render(&descriptor(42)), expected);
    }

    #[test]
    fn test_every_define_is_guarded() {
        let header = render(&descriptor(1));
        for name in [BUILD_NUMBER, VERSION, VERSION_SHORT] {
            let guard = format!("#ifndef {name}\n  #define {name} ");
            assert!(header.contains(&guard), "{name} is not guarded");
        }
        assert_eq!(header.matches("#endif").count(), 3);
    }

    #[test]
    fn test_build_number_has_no_padding() {
        let header = render(&descriptor(7));
        assert!(header.contains("#define BUILD_NUMBER \"7\""));
        assert!(header.contains("#define VERSION_SHORT \"v1.3.261018.7\""));
    }

    #[test]
    fn test_write_header_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_HEADER_PATH);

        write_header(&path, &render(&descriptor(1)), WriteMode::Atomic).unwrap();
        write_header(&path, &render(&descriptor(2)), WriteMode::Atomic).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&descriptor(2)));
    }

    #[test]
    fn test_write_header_failure_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.h");
        std::fs::create_dir(&path).unwrap();

        match write_header(&path, "x", WriteMode::InPlace) {
            Err(StampError::HeaderWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
