// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directive parsing and textual inversion.

use std::collections::BTreeSet;
use thiserror::Error;

/// Marks a subprocess stdout line as a directive rather than plain log text.
pub const DIRECTIVE_PREFIX: &str = "JET_TEST: ";

/// One enable/disable instruction emitted by the test binary mid-run.
///
/// Tags are opaque strings. A well-formed directive keeps the two sets
/// disjoint; overlap is rejected by [`Directive::parse`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directive {
    pub enable: BTreeSet<String>,
    pub disable: BTreeSet<String>,
}

impl Directive {
    /// Parse the clause text following the `JET_TEST:` prefix.
    ///
    /// The body is a `;`-separated list of `enable(tag[,tag...])` and
    /// `disable(tag[,tag...])` clauses, whitespace-tolerant around clauses
    /// and tags. Any other clause shape is fatal; the caller must not
    /// silently skip a malformed directive.
    pub fn parse(body: &str) -> Result<Self, DirectiveError> {
        let mut directive = Directive::default();
        for clause in body.split(';') {
            let clause = clause.trim();
            if let Some(tags) = clause_tags(clause, "enable") {
                directive.enable.extend(tags);
            } else if let Some(tags) = clause_tags(clause, "disable") {
                directive.disable.extend(tags);
            } else {
                return Err(DirectiveError::UnknownClause {
                    clause: clause.to_string(),
                });
            }
        }
        if let Some(tag) = directive.enable.intersection(&directive.disable).next() {
            return Err(DirectiveError::OverlappingTag { tag: tag.clone() });
        }
        Ok(directive)
    }
}

/// Tags of a `keyword(tag,tag,...)` clause, or `None` when the clause does
/// not have that exact shape.
fn clause_tags(clause: &str, keyword: &str) -> Option<Vec<String>> {
    let inner = clause
        .strip_prefix(keyword)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(|tag| tag.trim().to_string()).collect())
}

/// Textual inverse of a directive line: swaps the words `enable` and
/// `disable` everywhere in the string.
///
/// The swap goes through a placeholder so the second substitution cannot
/// re-match text produced by the first. Applied to the raw directive line
/// (prefix included), and `invert(invert(d)) == d` for any directive built
/// from `enable`/`disable` clause keywords.
pub fn invert(directive_text: &str) -> String {
    const PLACEHOLDER: &str = "\u{1}swap\u{1}";
    directive_text
        .replace("enable", PLACEHOLDER)
        .replace("disable", "enable")
        .replace(PLACEHOLDER, "disable")
}

#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("unknown directive clause: `{clause}`")]
    UnknownClause { clause: String },

    #[error("tag `{tag}` appears in both enable and disable")]
    OverlappingTag { tag: String },
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
