// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jetrun — live test-driven source toggler.
//!
//! Runs a compiled test binary, watches its stdout for `JET_TEST:`
//! directives, and comments/uncomments `<jet_tag:...>`-annotated lines in a
//! source tree so that later test cases compile against a different
//! configuration. Once the run completes (or fails), every applied
//! directive is undone in reverse order, leaving the tree byte-identical
//! to its pre-run state. The process exits with the test binary's own
//! exit code, so CI harnesses can treat it as a transparent passthrough
//! with side-effecting instrumentation.

pub mod cli;
pub mod output;
pub mod paths;
pub mod rebuild;
pub mod runner;
