// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Concepts and the lattice they are collected into.
//!
//! A [`Concept`] is an (extent, intent) pair that is a fixed point of the
//! derivation operators. The search engine emits accepted concepts into a
//! [`ConceptSink`]; [`ConceptLattice`] is the standard sink, an
//! append-only sequence in discovery order. The sink does no
//! deduplication: uniqueness is entirely the canonicity test's
//! responsibility, and the lattice records exactly what the engine emits.

use crate::sets::{Extent, Intent};
use std::fmt;

/// A formal concept: a maximal rectangle of the incidence relation.
///
/// Invariant (enforced by the engine, checked in debug builds): the
/// extent is exactly the set of objects sharing all attributes of the
/// intent, and the intent is exactly the set of attributes shared by all
/// objects of the extent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Concept {
    pub extent: Extent,
    pub intent: Intent,
}

impl fmt::Display for Concept {
    /// Format as "({objects}, {attributes})" in index form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.extent, self.intent)
    }
}

/// Where the search engine sends accepted concepts.
///
/// Implementations must be append-only: the engine relies on the emitted
/// prefix staying intact while the search is still running.
pub trait ConceptSink {
    fn emit(&mut self, concept: Concept);
}

/// All concepts found so far, in depth-first discovery order.
///
/// Grows monotonically while the search runs; once the search returns it
/// is complete and should be treated as read-only.
#[derive(Debug, Default)]
pub struct ConceptLattice {
    concepts: Vec<Concept>,
}

impl ConceptLattice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of concepts collected.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// The concept at discovery position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Concept> {
        self.concepts.get(index)
    }

    /// Iterate over concepts in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }
}

impl ConceptSink for ConceptLattice {
    fn emit(&mut self, concept: Concept) {
        self.concepts.push(concept);
    }
}

impl<'a> IntoIterator for &'a ConceptLattice {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}
