// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved runner configuration.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Cli;

/// The three directories the runner operates on, resolved once at startup
/// to absolute, symlink-free paths and passed into the run controller.
#[derive(Clone, Debug)]
pub struct RunnerPaths {
    /// Tree whose `<jet_tag:...>` lines get toggled.
    pub source_dir: PathBuf,

    /// Working directory for the cmake configure step.
    pub build_dir: PathBuf,

    /// Directory containing the `tests` executable.
    pub binary_dir: PathBuf,
}

impl RunnerPaths {
    /// Resolve the CLI paths. Any directory that does not exist or cannot
    /// be canonicalized is a configuration error, fatal before any
    /// subprocess work begins.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            source_dir: canonicalize(&cli.source_directory, "source")?,
            build_dir: canonicalize(&cli.build_directory, "build")?,
            binary_dir: canonicalize(&cli.binary_directory, "binary")?,
        })
    }
}

fn canonicalize(path: &Path, role: &'static str) -> Result<PathBuf, ConfigError> {
    path.canonicalize().map_err(|source| ConfigError::Unresolvable {
        role,
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve {role} directory {}: {source}", .path.display())]
    Unresolvable {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
