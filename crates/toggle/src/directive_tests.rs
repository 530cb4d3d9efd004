// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;

fn tags(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn parses_single_enable_clause() {
    let directive = Directive::parse("enable(fast)").unwrap();
    assert_eq!(directive.enable, tags(&["fast"]));
    assert!(directive.disable.is_empty());
}

#[test]
fn parses_mixed_clauses_with_whitespace() {
    let directive = Directive::parse(" enable( fast , smoke ) ; disable(slow) ").unwrap();
    assert_eq!(directive.enable, tags(&["fast", "smoke"]));
    assert_eq!(directive.disable, tags(&["slow"]));
}

#[test]
fn accumulates_tags_across_repeated_clauses() {
    let directive = Directive::parse("disable(a);disable(b)").unwrap();
    assert_eq!(directive.disable, tags(&["a", "b"]));
}

#[test]
fn rejects_unknown_clause_keyword() {
    let err = Directive::parse("maybe(x)").unwrap_err();
    assert!(matches!(err, DirectiveError::UnknownClause { clause } if clause == "maybe(x)"));
}

#[test]
fn rejects_keyword_without_parentheses() {
    assert!(Directive::parse("enable fast").is_err());
    assert!(Directive::parse("enabled(fast)").is_err());
}

#[test]
fn rejects_trailing_empty_clause() {
    assert!(Directive::parse("enable(fast);").is_err());
}

#[test]
fn rejects_tag_in_both_sets() {
    let err = Directive::parse("enable(fast);disable(fast)").unwrap_err();
    assert!(matches!(err, DirectiveError::OverlappingTag { tag } if tag == "fast"));
}

#[test]
fn invert_swaps_keywords() {
    assert_eq!(
        invert("enable(fast);disable(slow)"),
        "disable(fast);enable(slow)"
    );
}

#[test]
fn invert_keeps_prefix_and_spacing() {
    assert_eq!(
        invert("JET_TEST: disable(slow) ; enable(fast)"),
        "JET_TEST: enable(slow) ; disable(fast)"
    );
}

#[test]
fn inverted_directive_still_parses() {
    let inverted = invert("enable(a,b);disable(c)");
    let directive = Directive::parse(&inverted).unwrap();
    assert_eq!(directive.enable, tags(&["c"]));
    assert_eq!(directive.disable, tags(&["a", "b"]));
}

proptest! {
    #[test]
    fn invert_round_trips(
        clauses in prop::collection::vec(
            (any::<bool>(), prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..4)),
            1..5,
        )
    ) {
        let text = clauses
            .iter()
            .map(|(is_enable, tag_list)| {
                let keyword = if *is_enable { "enable" } else { "disable" };
                format!("{}({})", keyword, tag_list.join(","))
            })
            .collect::<Vec<_>>()
            .join(";");
        prop_assert_eq!(invert(&invert(&text)), text);
    }
}
