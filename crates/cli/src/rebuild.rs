// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build re-configuration trigger.

use std::path::Path;

use tokio::process::Command;

use crate::output::{print_runner, print_warning};

/// Fixed configure invocation: debug build with live-build tests enabled,
/// run from inside the build directory against its parent.
const CMAKE_ARGS: [&str; 3] = ["-DCMAKE_BUILD_TYPE=Debug", "-DJET_LIVE_BUILD_TESTS=ON", ".."];

/// Re-run the cmake configure step if a batch of patches touched a
/// build-descriptor file. Invoked once per directive application, not per
/// file.
///
/// Blocks until cmake completes: the next test case may depend on the new
/// configuration, so the controller must not read further output before
/// the configure step finishes. A spawn failure or non-zero exit is
/// surfaced as a warning and never aborts the run.
pub async fn maybe_rebuild(touched_build_descriptor: bool, build_dir: &Path) {
    if !touched_build_descriptor {
        return;
    }
    print_runner("Running cmake");
    match Command::new("cmake")
        .args(CMAKE_ARGS)
        .current_dir(build_dir)
        .status()
        .await
    {
        Ok(status) if status.success() => {}
        Ok(status) => print_warning(format_args!("cmake exited with {}", status)),
        Err(e) => print_warning(format_args!("failed to run cmake: {}", e)),
    }
}

#[cfg(test)]
#[path = "rebuild_tests.rs"]
mod tests;
