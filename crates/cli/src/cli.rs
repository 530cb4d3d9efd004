// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Live test-driven source toggler
#[derive(Parser, Clone, Debug)]
#[command(
    name = "jetrun",
    version,
    about = "Runs a test binary and toggles <jet_tag:> lines on its JET_TEST: directives"
)]
pub struct Cli {
    /// Path to the source tree to patch
    #[arg(short = 's', long)]
    pub source_directory: PathBuf,

    /// Path to the build directory (cwd for the cmake configure step)
    #[arg(short = 'b', long)]
    pub build_directory: PathBuf,

    /// Path to the directory containing the `tests` binary
    #[arg(short = 'd', long)]
    pub binary_directory: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
