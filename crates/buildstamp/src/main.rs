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

//! buildstamp - Entry point for the pre-build step
//!
//! Usage:
//!   buildstamp                     # bump ./versioning, write ./include/version.h
//!   buildstamp --config ci.toml    # read settings from a specific file
//!   buildstamp --header gen/ver.h  # override a single path

use anyhow::Context;
use buildstamp::{Stamper, load_config};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "buildstamp")]
#[command(version, about = "Bump the firmware build number and regenerate the version header")]
struct Args {
    /// Config file (default: ./buildstamp.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build counter file, overrides the config
    #[arg(long)]
    counter: Option<PathBuf>,

    /// Header output file, overrides the config
    #[arg(long)]
    header: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("buildstamp={level}").parse()?),
        )
        .init();

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(counter) = args.counter {
        config.counter_path = counter;
    }
    if let Some(header) = args.header {
        config.header_path = header;
    }
    config.validate()?;

    let outcome = Stamper::new(config)
        .run()
        .context("Failed to stamp build")?;

    info!(
        "Stamped {} (counter: {}, header: {})",
        outcome.version.long(),
        outcome.counter_path.display(),
        outcome.header_path.display()
    );
    Ok(())
}
