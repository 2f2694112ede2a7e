// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Galois-connection derivation operators.
//!
//! Two pure functions over an immutable [`FormalContext`]:
//!
//! - [`extent_of`] restricts a running extent to the objects that also
//!   have a newly added attribute. It is an intersection with the
//!   attribute's column, not a recomputation from scratch: during the CBO
//!   descent the current extent already reflects every attribute added so
//!   far, so one more attribute only ever shrinks it.
//! - [`intent_of`] derives the full set of attributes shared by every
//!   object of an extent.
//!
//! The empty extent is a genuine case, not an error: no object constrains
//! anything, so every attribute is vacuously shared and the derived intent
//! is the full attribute set. That is exactly the bottom-most concept of
//! the lattice and the enumeration relies on it.
//!
//! Both functions are total and deterministic. A pair (extent, intent)
//! with `intent_of(extent) == intent` and the extent equal to the objects
//! having all of `intent` is a formal concept, a fixed point of the
//! derivation pair.

use crate::context::FormalContext;
use crate::sets::{BitSet, Extent, Intent};

/// Restrict `extent` to the objects that also have `attribute`.
///
/// # Panics
///
/// Panics if `attribute` is out of range or `extent` was built for a
/// different object universe.
pub fn extent_of(ctx: &FormalContext, extent: &Extent, attribute: usize) -> Extent {
    extent.intersection(ctx.attribute_column(attribute))
}

/// Derive the set of attributes shared by every object in `extent`.
///
/// An empty extent derives the full attribute set.
pub fn intent_of(ctx: &FormalContext, extent: &Extent) -> Intent {
    let mut intent = BitSet::full(ctx.attribute_count());
    for object in extent.iter() {
        intent = intent.intersection(ctx.object_row(object));
    }
    intent
}

/// Derive the set of objects having every attribute in `intent`.
///
/// The dual of [`intent_of`]; an empty intent derives the full object
/// set. The engine itself never needs this direction (it restricts
/// extents incrementally), but concept validation and tests do.
pub fn objects_of(ctx: &FormalContext, intent: &Intent) -> Extent {
    let mut extent = BitSet::full(ctx.object_count());
    for attribute in intent.iter() {
        extent = extent.intersection(ctx.attribute_column(attribute));
    }
    extent
}
