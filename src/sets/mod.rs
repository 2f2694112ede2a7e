// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! BitSet type for representing object and attribute sets.
//!
//! A BitSet is a compact membership set over integer indices, backed by an
//! array of u64 words. Unlike a compile-time-sized bitset, the capacity is
//! chosen at construction from the context's object or attribute count, so
//! one type serves both extents (object sets) and intents (attribute sets).
//!
//! # Examples
//!
//! ```
//! use concept_search::sets::BitSet;
//!
//! let mut set = BitSet::empty(10);
//! set.insert(0);
//! set.insert(5);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(0));
//! assert!(set.contains(5));
//! assert!(!set.contains(3));
//! ```

use std::fmt;

/// An extent: a set of object indices.
pub type Extent = BitSet;

/// An intent: a set of attribute indices.
pub type Intent = BitSet;

/// A membership set over indices `0..capacity`, represented as a bitset.
///
/// Bit i (across all words) is set if index i is in the set. Bits at or
/// above `capacity` are always zero, so `Eq` and `Hash` are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Create an empty set with room for indices `0..capacity`.
    pub fn empty(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Create a set containing every index in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut words = vec![0u64; capacity.div_ceil(64)];

        // Fill complete words
        let complete_words = capacity / 64;
        for word in words.iter_mut().take(complete_words) {
            *word = u64::MAX;
        }

        // Fill partial last word if needed
        let remaining_bits = capacity % 64;
        if remaining_bits > 0 {
            words[complete_words] = (1u64 << remaining_bits) - 1;
        }

        Self { words, capacity }
    }

    /// The number of representable indices (`0..capacity`).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the set contains a specific index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn contains(&self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "index out of range: {} >= {}",
            index,
            self.capacity
        );
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Insert an index into the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) {
        assert!(
            index < self.capacity,
            "index out of range: {} >= {}",
            index,
            self.capacity
        );
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Remove an index from the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn remove(&mut self, index: usize) {
        assert!(
            index < self.capacity,
            "index out of range: {} >= {}",
            index,
            self.capacity
        );
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Get the number of indices in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate over all indices in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        BitSetIter {
            words: &self.words,
            word_idx: 0,
            bit_idx: 0,
            capacity: self.capacity,
        }
    }

    /// Compute the intersection of two sets.
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ (sets over different universes).
    pub fn intersection(&self, other: &Self) -> Self {
        assert_eq!(
            self.capacity, other.capacity,
            "intersection over mismatched universes"
        );
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        Self {
            words,
            capacity: self.capacity,
        }
    }

    /// Compute the union of two sets.
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ (sets over different universes).
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(
            self.capacity, other.capacity,
            "union over mismatched universes"
        );
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a | b)
            .collect();
        Self {
            words,
            capacity: self.capacity,
        }
    }

    /// Compute the difference of two sets (self - other).
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ (sets over different universes).
    pub fn difference(&self, other: &Self) -> Self {
        assert_eq!(
            self.capacity, other.capacity,
            "difference over mismatched universes"
        );
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & !b)
            .collect();
        Self {
            words,
            capacity: self.capacity,
        }
    }

    /// Check whether two sets agree on every index strictly below `bound`.
    ///
    /// This is the comparison the canonicity test is built on: only the
    /// prefix `0..bound` matters, indices at or above `bound` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ, or `bound > capacity`.
    pub fn eq_below(&self, other: &Self, bound: usize) -> bool {
        assert_eq!(
            self.capacity, other.capacity,
            "eq_below over mismatched universes"
        );
        assert!(bound <= self.capacity, "bound out of range");

        let complete_words = bound / 64;
        if self.words[..complete_words] != other.words[..complete_words] {
            return false;
        }
        let remaining_bits = bound % 64;
        if remaining_bits > 0 {
            let mask = (1u64 << remaining_bits) - 1;
            if self.words[complete_words] & mask != other.words[complete_words] & mask {
                return false;
            }
        }
        true
    }

    /// Check whether no index strictly below `bound` is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `bound > capacity`.
    pub fn is_empty_below(&self, bound: usize) -> bool {
        assert!(bound <= self.capacity, "bound out of range");

        let complete_words = bound / 64;
        if self.words[..complete_words].iter().any(|&w| w != 0) {
            return false;
        }
        let remaining_bits = bound % 64;
        if remaining_bits > 0 {
            let mask = (1u64 << remaining_bits) - 1;
            if self.words[complete_words] & mask != 0 {
                return false;
            }
        }
        true
    }
}

/// Iterator over indices in a BitSet.
struct BitSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    bit_idx: usize,
    capacity: usize,
}

impl<'a> Iterator for BitSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            let index = self.word_idx * 64 + self.bit_idx;
            if index >= self.capacity {
                return None;
            }

            let bit_set = (self.words[self.word_idx] >> self.bit_idx) & 1 != 0;

            // Advance to next bit
            self.bit_idx += 1;
            if self.bit_idx >= 64 {
                self.bit_idx = 0;
                self.word_idx += 1;
            }

            if bit_set {
                return Some(index);
            }
        }
        None
    }
}

impl fmt::Display for BitSet {
    /// Format a set as "{0, 5, 12, ...}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for index in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        write!(f, "}}")
    }
}
