// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use concept_search::closure::{intent_of, objects_of};
use concept_search::{BitSet, Concept, ConceptLattice, FormalContext};
use std::collections::HashSet;

/// Enumerate all concepts by brute force: close every attribute subset
/// and deduplicate by the resulting extent.
///
/// Exponential in the attribute count, so only usable as an oracle for
/// small contexts (the engine's own tests stay at or below 12x12).
pub fn brute_force_concepts(ctx: &FormalContext) -> Vec<Concept> {
    let m = ctx.attribute_count();
    assert!(m <= 20, "brute force oracle is exponential in attributes");

    let mut seen_extents = HashSet::new();
    let mut concepts = Vec::new();
    for bits in 0u64..(1 << m) {
        let mut attrs = BitSet::empty(m);
        for a in 0..m {
            if bits & (1 << a) != 0 {
                attrs.insert(a);
            }
        }
        let extent = objects_of(ctx, &attrs);
        if seen_extents.insert(extent.clone()) {
            let intent = intent_of(ctx, &extent);
            concepts.push(Concept { extent, intent });
        }
    }
    concepts
}

/// Assert that every emitted concept is a closure fixed point, that no
/// two emitted concepts share an extent, and that the emitted set equals
/// the brute-force oracle's.
pub fn assert_matches_brute_force(ctx: &FormalContext, lattice: &ConceptLattice) {
    let mut extents = HashSet::new();
    for concept in lattice.iter() {
        assert_eq!(
            intent_of(ctx, &concept.extent),
            concept.intent,
            "intent of {} is not closed",
            concept
        );
        assert_eq!(
            objects_of(ctx, &concept.intent),
            concept.extent,
            "extent of {} is not closed",
            concept
        );
        assert!(
            extents.insert(concept.extent.clone()),
            "duplicate extent emitted: {}",
            concept.extent
        );
    }

    let oracle = brute_force_concepts(ctx);
    assert_eq!(
        lattice.len(),
        oracle.len(),
        "engine found {} concepts, brute force found {}",
        lattice.len(),
        oracle.len()
    );
    for concept in &oracle {
        assert!(
            extents.contains(&concept.extent),
            "engine missed concept {}",
            concept
        );
    }
}
