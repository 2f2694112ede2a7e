// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the Close-by-One concept enumeration algorithm.
//!
//! Given a formal context (a finite binary relation between objects and
//! attributes), this crate enumerates every formal concept: each pair
//! (extent, intent) where the extent is exactly the objects sharing all
//! attributes of the intent and the intent is exactly the attributes
//! shared by all objects of the extent. Equivalently, every maximal
//! rectangle of the relation.
//!
//! # Architecture
//!
//! The search reads one immutable structure and writes one append-only
//! collection:
//!
//! - [`context::FormalContext`] holds the relation, built once from a
//!   `.cxt` file ([`cxt`]) or directly from rows in tests;
//! - [`closure`] provides the two derivation operators of the Galois
//!   connection between object sets and attribute sets;
//! - [`search`] runs the depth-first canonical-generation recursion,
//!   using [`search::canonical`] to prune duplicate generation paths;
//! - [`lattice::ConceptLattice`] collects emitted concepts in discovery
//!   order.
//!
//! # Example
//!
//! ```
//! use concept_search::context::FormalContext;
//! use concept_search::search::enumerate_concepts;
//!
//! // Two objects with disjoint attributes.
//! let ctx = FormalContext::from_rows(&["X.", ".X"]);
//! let lattice = enumerate_concepts(&ctx);
//!
//! // Top, both singletons, and the degenerate bottom.
//! assert_eq!(lattice.len(), 4);
//! ```

pub mod closure;
pub mod context;
pub mod cxt;
pub mod lattice;
pub mod search;
pub mod sets;
pub mod statistics;

// Re-export commonly used types
pub use context::FormalContext;
pub use lattice::{Concept, ConceptLattice, ConceptSink};
pub use search::{enumerate_concepts, CboEngine};
pub use sets::{BitSet, Extent, Intent};
