// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run controller: subprocess lifecycle, directive demultiplexing, and the
//! revert stack.
//!
//! The controller is deliberately single-threaded and lockstep: each
//! directive is fully applied (including any triggered rebuild) before the
//! next output line is consumed, because a later test case may depend on
//! the just-applied source state.

use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use jetrun_toggle::{
    apply_directive, invert, Directive, DirectiveError, PatchError, DIRECTIVE_PREFIX,
};

use crate::output::print_runner;
use crate::paths::RunnerPaths;
use crate::rebuild::maybe_rebuild;

/// Name of the test executable inside the binary directory.
const TEST_BINARY: &str = "tests";

/// Fixed argument forcing deterministic test ordering in the test binary.
const RNG_SEED_ARG: &str = "--rng-seed=0";

/// Run the test binary to completion, applying its directives as they
/// arrive and undoing them afterwards. Returns the exit code to pass
/// through.
///
/// The revert phase runs on every exit path: a fatal parse or apply error
/// mid-stream still restores the tree before the error propagates.
pub async fn run(paths: &RunnerPaths) -> Result<i32, RunnerError> {
    print_runner(format_args!("source dir: {}", paths.source_dir.display()));
    print_runner(format_args!("build dir: {}", paths.build_dir.display()));

    let program = paths.binary_dir.join(TEST_BINARY);
    print_runner(format_args!(
        "Running '{} {}'",
        program.display(),
        RNG_SEED_ARG
    ));

    let mut child = Command::new(&program)
        .arg(RNG_SEED_ARG)
        .stdout(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = child.stdout.take().ok_or(RunnerError::NoStdout)?;

    let mut revert_stack: Vec<String> = Vec::new();
    let stream_result = stream(paths, stdout, &mut revert_stack).await;

    if stream_result.is_err() {
        // The binary may still be writing; do not let Draining block
        // behind it once the run is already doomed.
        let _ = child.kill().await;
    }
    let status = child.wait().await.map_err(RunnerError::Stream)?;

    let revert_result = revert(paths, revert_stack).await;

    stream_result?;
    revert_result?;
    Ok(exit_code(status))
}

/// Streaming phase: demultiplex one stdout line at a time.
///
/// Directive lines are parsed, applied, and their textual inverses pushed
/// onto the revert stack; all other lines are relayed verbatim.
async fn stream<R: AsyncRead + Unpin>(
    paths: &RunnerPaths,
    stdout: R,
    revert_stack: &mut Vec<String>,
) -> Result<(), RunnerError> {
    let mut lines = BufReader::new(stdout).lines();
    while let Some(line) = lines.next_line().await.map_err(RunnerError::Stream)? {
        let line = line.trim();
        if let Some(body) = line.strip_prefix(DIRECTIVE_PREFIX) {
            apply_directive_line(paths, body).await?;
            revert_stack.push(invert(line));
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Reverting phase: replay the accumulated inverses last-in-first-out, so
/// later toggles are undone before the earlier toggles they may have
/// stacked on.
async fn revert(paths: &RunnerPaths, mut revert_stack: Vec<String>) -> Result<(), RunnerError> {
    while let Some(line) = revert_stack.pop() {
        let body = line.strip_prefix(DIRECTIVE_PREFIX).unwrap_or(&line);
        apply_directive_line(paths, body).await?;
    }
    Ok(())
}

/// Parse, patch, announce, and (when a build descriptor was touched)
/// re-configure for one directive body.
async fn apply_directive_line(paths: &RunnerPaths, body: &str) -> Result<(), RunnerError> {
    let directive = Directive::parse(body)?;
    let outcome = apply_directive(&paths.source_dir, &directive)?;
    for path in &outcome.patched {
        print_runner(format_args!("Patching source file: {}", path.display()));
    }
    maybe_rebuild(outcome.build_descriptor_touched, &paths.build_dir).await;
    Ok(())
}

/// Exit code to pass through. Signal death maps to the conventional
/// 128+signal on unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("test binary stdout was not captured")]
    NoStdout,

    #[error("failed reading test binary output: {0}")]
    Stream(#[source] io::Error),

    #[error(transparent)]
    Directive(#[from] DirectiveError),

    #[error(transparent)]
    Patch(#[from] PatchError),
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
