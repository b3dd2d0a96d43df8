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

//! Exercises the zero-argument entry point, which works relative to the
//! current directory. Kept alone in this binary because it changes the
//! process working directory.

use tempfile::TempDir;

#[test]
fn test_run_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let first = buildstamp::run().unwrap();
    assert_eq!(first.build_number(), 1);
    assert_eq!(std::fs::read_to_string("versioning").unwrap(), "1");
    assert!(std::path::Path::new("include/version.h").is_file());

    std::fs::write("buildstamp.toml", "major = 2\nminor = 5\n").unwrap();
    let second = buildstamp::run().unwrap();
    assert_eq!(second.build_number(), 2);
    assert!(second.version.short().starts_with("v2.5."));

    let header = std::fs::read_to_string("include/version.h").unwrap();
    assert!(header.contains("#define BUILD_NUMBER \"2\""));
}
