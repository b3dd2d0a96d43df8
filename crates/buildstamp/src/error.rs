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

//! Error types for buildstamp

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a stamping run.
#[derive(Debug, Error)]
pub enum StampError {
    #[error("failed to write build counter to {}: {source}", .path.display())]
    CounterWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write version header to {}: {source}", .path.display())]
    HeaderWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

/// Reasons the previous build number could not be recovered.
///
/// None of these abort a run: the counter restarts from 1 instead.
#[derive(Debug, Error)]
pub enum CounterReadError {
    #[error("counter file {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("failed to read counter file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("counter file {} is empty", .0.display())]
    Empty(PathBuf),

    #[error("counter file {} holds {content:?}, not a build number", .path.display())]
    Malformed { path: PathBuf, content: String },
}

pub type Result<T> = std::result::Result<T, StampError>;
