// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters the search engine increments while it runs, reported once at
//! the end. None of them affect the search's behavior.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Concepts emitted to the sink.
    ConceptsEmitted,
    /// Candidate closures computed (one per attribute tried).
    ClosuresComputed,
    /// Candidates discarded by the canonicity test.
    CanonicityRejections,
    /// Attributes skipped because they were already in the intent.
    AttributeSkips,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
