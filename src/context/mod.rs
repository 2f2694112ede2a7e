// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The formal context: the immutable data the whole search reads.
//!
//! A formal context is a triple (objects, attributes, incidence relation).
//! It is built once, from a `.cxt` file or directly in tests, and never
//! mutated afterwards. Every other component (closure operators, canonicity
//! test, CBO recursion) takes it by shared reference, so a
//! future parallel search could fan sibling branches out over the same
//! context without any locking.
//!
//! The relation is stored twice, as rows and as columns:
//! - `incidence_rows[o]` is the attribute set of object `o` (used when
//!   deriving intents);
//! - `attribute_columns[a]` is the object set of attribute `a` (used when
//!   restricting extents).
//!
//! Both views are built from the same input rows at construction; the
//! duplication trades a little memory for O(words) set intersections on
//! the hot path instead of per-bit probing.

use crate::sets::{BitSet, Extent, Intent};
use tracing::debug;

/// An immutable object/attribute universe with its incidence relation.
///
/// Object and attribute names are cosmetic: they are carried for display
/// only and never consulted by the algorithm, which works purely on
/// indices `0..object_count` and `0..attribute_count`.
#[derive(Debug, Clone)]
pub struct FormalContext {
    object_names: Vec<String>,
    attribute_names: Vec<String>,
    incidence_rows: Vec<Intent>,
    attribute_columns: Vec<Extent>,
}

impl FormalContext {
    /// Build a context from names and per-object attribute rows.
    ///
    /// Dimension validation against a source file is the loader's job;
    /// by the time a context is constructed the shape must be coherent.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows differs from the number of object
    /// names, or any row's capacity differs from the number of attribute
    /// names.
    pub fn new(
        object_names: Vec<String>,
        attribute_names: Vec<String>,
        incidence_rows: Vec<Intent>,
    ) -> Self {
        let object_count = object_names.len();
        let attribute_count = attribute_names.len();
        assert_eq!(
            incidence_rows.len(),
            object_count,
            "row count does not match object count"
        );
        for row in &incidence_rows {
            assert_eq!(
                row.capacity(),
                attribute_count,
                "row width does not match attribute count"
            );
        }

        // Column view derived from the rows.
        let mut attribute_columns = vec![BitSet::empty(object_count); attribute_count];
        for (object, row) in incidence_rows.iter().enumerate() {
            for attribute in row.iter() {
                attribute_columns[attribute].insert(object);
            }
        }

        debug!(
            objects = object_count,
            attributes = attribute_count,
            incidences = incidence_rows.iter().map(BitSet::len).sum::<usize>(),
            "formal context constructed"
        );

        Self {
            object_names,
            attribute_names,
            incidence_rows,
            attribute_columns,
        }
    }

    /// Build a context from ASCII-art relation rows, one `&str` per object,
    /// with `'X'` marking an incidence. Names are synthesized (`o0`, `a0`,
    /// ...). Intended for tests and examples.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all the same length.
    pub fn from_rows(rows: &[&str]) -> Self {
        let attribute_count = rows.first().map_or(0, |r| r.len());
        let incidence_rows = rows
            .iter()
            .map(|row| {
                assert_eq!(row.len(), attribute_count, "ragged relation rows");
                let mut bits = BitSet::empty(attribute_count);
                for (a, c) in row.chars().enumerate() {
                    if c == 'X' {
                        bits.insert(a);
                    }
                }
                bits
            })
            .collect();

        let object_names = (0..rows.len()).map(|o| format!("o{}", o)).collect();
        let attribute_names = (0..attribute_count).map(|a| format!("a{}", a)).collect();
        Self::new(object_names, attribute_names, incidence_rows)
    }

    /// Number of objects in the universe.
    pub fn object_count(&self) -> usize {
        self.object_names.len()
    }

    /// Number of attributes in the universe.
    pub fn attribute_count(&self) -> usize {
        self.attribute_names.len()
    }

    /// Does `object` have `attribute`? O(1).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn has(&self, object: usize, attribute: usize) -> bool {
        self.incidence_rows[object].contains(attribute)
    }

    /// The attribute set of one object.
    pub fn object_row(&self, object: usize) -> &Intent {
        &self.incidence_rows[object]
    }

    /// The object set of one attribute.
    pub fn attribute_column(&self, attribute: usize) -> &Extent {
        &self.attribute_columns[attribute]
    }

    /// The extent containing every object (the top concept's extent).
    pub fn all_objects(&self) -> Extent {
        BitSet::full(self.object_count())
    }

    /// Display name of an object.
    pub fn object_name(&self, object: usize) -> &str {
        &self.object_names[object]
    }

    /// Display name of an attribute.
    pub fn attribute_name(&self, attribute: usize) -> &str {
        &self.attribute_names[attribute]
    }
}
