// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Close-by-One search engine.
//!
//! CBO enumerates every formal concept of a context by depth-first
//! canonical generation. Starting from the top concept (all objects and
//! their shared attributes), each call:
//!
//! 1. emits its (extent, intent) pair; every call reached is one
//!    distinct, valid concept;
//! 2. tries each attribute `j` from its start index upward: attributes
//!    already in the intent are skipped, otherwise the extent is
//!    restricted to `j`'s column and re-closed;
//! 3. recurses into the child with start index `j + 1` only if the
//!    candidate passes the canonicity test.
//!
//! Termination is structural: the start index strictly increases on every
//! recursive call and is bounded by the attribute count, which also
//! bounds the recursion depth.
//!
//! Each call owns its extent and intent; siblings never share mutable
//! buffers. That keeps branches independent, which is what would make a
//! parallel fan-out of sibling subtrees safe should one ever be wanted.

pub mod canonical;

pub use canonical::is_canonical;

use crate::closure::{extent_of, intent_of};
use crate::context::FormalContext;
use crate::lattice::{Concept, ConceptLattice, ConceptSink};
use crate::sets::{Extent, Intent};
use crate::statistics::{Counters, Statistics};
use tracing::debug;

/// Depth-first canonical-generation enumerator over one context.
///
/// The engine borrows the context read-only and a sink to emit into; it
/// owns nothing but its counters. Consumed by [`CboEngine::run`], which
/// returns the counters so callers can report them.
pub struct CboEngine<'a, S: ConceptSink> {
    ctx: &'a FormalContext,
    sink: &'a mut S,
    statistics: Statistics,
}

impl<'a, S: ConceptSink> CboEngine<'a, S> {
    pub fn new(ctx: &'a FormalContext, sink: &'a mut S) -> Self {
        Self {
            ctx,
            sink,
            statistics: Statistics::new(),
        }
    }

    /// Run the enumeration to completion.
    ///
    /// Emits every formal concept of the context to the sink, each
    /// exactly once, in depth-first discovery order, then returns the
    /// search counters. Given a valid context this cannot fail; in debug
    /// builds every emitted concept is asserted to be a closure fixed
    /// point, so an engine bug dies loudly instead of producing a
    /// plausible-looking wrong lattice.
    pub fn run(mut self) -> Statistics {
        let top_extent = self.ctx.all_objects();
        let top_intent = intent_of(self.ctx, &top_extent);

        self.compute_from(top_extent, top_intent, 0);

        debug!(
            concepts = self.statistics.get(Counters::ConceptsEmitted),
            closures = self.statistics.get(Counters::ClosuresComputed),
            rejected = self.statistics.get(Counters::CanonicityRejections),
            "close-by-one search finished"
        );
        self.statistics
    }

    /// One node of the generation tree: emit, then extend.
    fn compute_from(&mut self, extent: Extent, intent: Intent, start: usize) {
        debug_assert!(
            self.concept_is_closed(&extent, &intent),
            "emitted pair is not a closure fixed point: ({}, {})",
            extent,
            intent
        );

        self.sink.emit(Concept {
            extent: extent.clone(),
            intent: intent.clone(),
        });
        self.statistics.increment(Counters::ConceptsEmitted);

        for j in start..self.ctx.attribute_count() {
            if intent.contains(j) {
                // Already implied; adding it would regenerate this node.
                self.statistics.increment(Counters::AttributeSkips);
                continue;
            }

            let child_extent = extent_of(self.ctx, &extent, j);
            let child_intent = intent_of(self.ctx, &child_extent);
            self.statistics.increment(Counters::ClosuresComputed);

            if is_canonical(&intent, &child_intent, j) {
                self.compute_from(child_extent, child_intent, j + 1);
            } else {
                self.statistics.increment(Counters::CanonicityRejections);
            }
        }
    }

    /// Closure-property check backing the debug assertion.
    fn concept_is_closed(&self, extent: &Extent, intent: &Intent) -> bool {
        intent_of(self.ctx, extent) == *intent
            && crate::closure::objects_of(self.ctx, intent) == *extent
    }
}

/// Enumerate all formal concepts of `ctx` into a fresh lattice.
///
/// Convenience wrapper over [`CboEngine`] for callers that just want the
/// result collection.
pub fn enumerate_concepts(ctx: &FormalContext) -> ConceptLattice {
    let mut lattice = ConceptLattice::new();
    CboEngine::new(ctx, &mut lattice).run();
    lattice
}
