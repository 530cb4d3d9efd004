// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag scanning and line patching across a source tree.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::directive::Directive;

/// In-source annotation naming the tags that govern a line's commented state.
const TAG_MARKER: &str = "<jet_tag:";

/// File the build tool reads for configuration. Toggling a line in one
/// requires re-running the configure step.
const BUILD_DESCRIPTOR: &str = "CMakeLists.txt";

/// File mutations produced by applying one directive to a whole tree.
#[derive(Clone, Debug, Default)]
pub struct PatchOutcome {
    /// Files rewritten in place, in traversal order.
    pub patched: Vec<PathBuf>,

    /// Whether any build-descriptor file was among them.
    pub build_descriptor_touched: bool,
}

/// Apply one directive to every regular file under `tree_root`.
///
/// A file is rewritten only when at least one of its marker lines matched
/// the directive; files without markers are never opened for writing. The
/// rewrite preserves line order and line endings, so applying a directive
/// and later its inverse restores the original bytes.
pub fn apply_directive(
    tree_root: &Path,
    directive: &Directive,
) -> Result<PatchOutcome, PatchError> {
    let mut outcome = PatchOutcome::default();
    for entry in WalkDir::new(tree_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_descriptor = is_build_descriptor(path);
        let prefix = if is_descriptor { "#" } else { "//" };
        if patch_file(path, prefix, directive)? {
            outcome.build_descriptor_touched |= is_descriptor;
            outcome.patched.push(path.to_path_buf());
        }
    }
    Ok(outcome)
}

fn is_build_descriptor(path: &Path) -> bool {
    path.file_name() == Some(OsStr::new(BUILD_DESCRIPTOR))
}

/// Rewrite a single file per the directive. Returns whether it was modified.
fn patch_file(path: &Path, prefix: &str, directive: &Directive) -> Result<bool, PatchError> {
    let contents = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rewritten = String::with_capacity(contents.len());
    let mut modified = false;
    for line in contents.split_inclusive('\n') {
        match toggle_line(line, prefix, directive) {
            Some(toggled) => {
                // A matched line counts as modified even when the toggled
                // form equals the original (e.g. disabling an already
                // commented line).
                rewritten.push_str(&toggled);
                modified = true;
            }
            None => rewritten.push_str(line),
        }
    }

    if modified {
        fs::write(path, rewritten).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(modified)
}

/// The toggled form of one physical line, or `None` when the line carries
/// no marker or its tags intersect neither set.
fn toggle_line(line: &str, prefix: &str, directive: &Directive) -> Option<String> {
    // Only a prefix at column 0 counts as a comment.
    let uncommented = line.strip_prefix(prefix).unwrap_or(line);
    let stripped = uncommented.trim();
    let marker = stripped.find(TAG_MARKER)?;
    let tags = marker_tags(&stripped[marker + TAG_MARKER.len()..]);
    if tags.iter().any(|tag| directive.disable.contains(tag)) {
        Some(format!("{prefix}{uncommented}"))
    } else if tags.iter().any(|tag| directive.enable.contains(tag)) {
        Some(uncommented.to_string())
    } else {
        None
    }
}

/// Tags between the marker and the line's final character. The closing `>`
/// is assumed to be the last character of the trimmed line; nothing beyond
/// that is validated.
fn marker_tags(rest: &str) -> Vec<String> {
    let end = rest.len() - rest.chars().last().map_or(0, char::len_utf8);
    rest.get(..end)
        .unwrap_or("")
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect()
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to walk source tree")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
