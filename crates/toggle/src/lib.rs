// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directive parsing and tagged-line toggling.
//!
//! This crate holds the pure parts of the jetrun test runner: parsing
//! `enable(...)` / `disable(...)` directives emitted by a test binary,
//! deriving their textual inverses, and commenting/uncommenting source
//! lines carrying a `<jet_tag:...>` marker. It performs no process
//! handling and no printing; the cli crate owns both.

mod directive;
mod patch;

pub use directive::{invert, Directive, DirectiveError, DIRECTIVE_PREFIX};
pub use patch::{apply_directive, PatchError, PatchOutcome};
