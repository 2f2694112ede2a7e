// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine-level tests: the enumeration must agree with a brute-force
//! oracle, emit each concept exactly once, and always include the top
//! and bottom concepts.

mod common;

use common::assert_matches_brute_force;
use concept_search::closure::{intent_of, objects_of};
use concept_search::search::enumerate_concepts;
use concept_search::{BitSet, FormalContext};

#[test]
fn test_matches_brute_force_on_small_contexts() {
    let contexts: Vec<Vec<&str>> = vec![
        vec!["X.", ".X"],
        vec!["X.", "X."],
        vec!["XX.", "X.X", "..X"],
        vec!["X...", "XX..", "XXX.", "XXXX"],
        vec!["X.X.X", ".X.X.", "XXX..", "...XX", "X....", ".XXXX"],
        vec!["....", "....", "...."],
        vec!["XXXX", "XXXX"],
    ];

    for rows in contexts {
        let ctx = FormalContext::from_rows(&rows);
        let lattice = enumerate_concepts(&ctx);
        assert_matches_brute_force(&ctx, &lattice);
    }
}

#[test]
fn test_matches_brute_force_pseudorandom_12x12() {
    // Deterministic pseudorandom relation at the oracle's size limit.
    let mut state = 0x2545F4914F6CDD1Du64;
    let mut rows = Vec::new();
    for _ in 0..12 {
        let mut row = String::new();
        for _ in 0..12 {
            // xorshift
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            row.push(if state & 3 == 0 { 'X' } else { '.' });
        }
        rows.push(row);
    }
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

    let ctx = FormalContext::from_rows(&rows);
    let lattice = enumerate_concepts(&ctx);
    assert_matches_brute_force(&ctx, &lattice);
}

#[test]
fn test_top_concept_present_exactly_once() {
    let ctx = FormalContext::from_rows(&["XX.", "X.X", "..X"]);
    let lattice = enumerate_concepts(&ctx);

    let top_extent = ctx.all_objects();
    let top_intent = intent_of(&ctx, &top_extent);
    let count = lattice
        .iter()
        .filter(|c| c.extent == top_extent && c.intent == top_intent)
        .count();
    assert_eq!(count, 1);

    // Discovery order starts at the top.
    assert_eq!(lattice.get(0).unwrap().extent, top_extent);
}

#[test]
fn test_bottom_concept_present_exactly_once() {
    let ctx = FormalContext::from_rows(&["XX.", "X.X", "..X"]);
    let lattice = enumerate_concepts(&ctx);

    let bottom_intent = BitSet::full(ctx.attribute_count());
    let bottom_extent = objects_of(&ctx, &bottom_intent);
    let count = lattice
        .iter()
        .filter(|c| c.extent == bottom_extent && c.intent == bottom_intent)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_degenerate_bottom_has_full_intent() {
    // No object has every attribute, so the bottom extent is empty and
    // its intent is the full attribute set by the empty-extent rule.
    let ctx = FormalContext::from_rows(&["X.", ".X"]);
    let lattice = enumerate_concepts(&ctx);

    let bottom = lattice
        .iter()
        .find(|c| c.extent.is_empty())
        .expect("degenerate bottom concept missing");
    assert_eq!(bottom.intent.len(), ctx.attribute_count());
}

#[test]
fn test_full_relation_collapses_to_one_concept() {
    // Every object has every attribute: top and bottom coincide.
    let ctx = FormalContext::from_rows(&["XX", "XX"]);
    let lattice = enumerate_concepts(&ctx);
    assert_eq!(lattice.len(), 1);

    let only = lattice.get(0).unwrap();
    assert_eq!(only.extent.len(), 2);
    assert_eq!(only.intent.len(), 2);
}

#[test]
fn test_contranominal_scale_is_boolean_lattice() {
    // Each object has every attribute but its own: the concept lattice is
    // the full Boolean lattice, 2^n concepts.
    let ctx = FormalContext::from_rows(&[".XXX", "X.XX", "XX.X", "XXX."]);
    let lattice = enumerate_concepts(&ctx);
    assert_eq!(lattice.len(), 16);
    assert_matches_brute_force(&ctx, &lattice);
}

#[test]
fn test_nominal_scale_concept_count() {
    // The diagonal relation on n objects yields top, n singletons, and
    // the degenerate bottom: n + 2 concepts.
    let ctx = FormalContext::from_rows(&["X...", ".X..", "..X.", "...X"]);
    let lattice = enumerate_concepts(&ctx);
    assert_eq!(lattice.len(), 6);
    assert_matches_brute_force(&ctx, &lattice);
}
