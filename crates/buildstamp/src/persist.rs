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

//! File output shared by the counter and the header

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// How an output file replaces its previous content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and rewrite the target directly.
    InPlace,
    /// Write a sibling `.tmp` file, then rename it over the target.
    #[default]
    Atomic,
}

impl WriteMode {
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic { Self::Atomic } else { Self::InPlace }
    }
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: &str, mode: WriteMode) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    match mode {
        WriteMode::InPlace => fs::write(path, contents),
        WriteMode::Atomic => {
            let temp_path = path.with_extension("tmp");
            fs::write(&temp_path, contents)?;
            if let Err(e) = fs::rename(&temp_path, path) {
                // Leave no stray temp file next to the target
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
            debug!("Replaced {} via {}", path.display(), temp_path.display());
            Ok(())
        }
    }
}
