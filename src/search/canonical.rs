// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The canonicity test: the pruning rule that makes CBO emit each
//! concept exactly once.
//!
//! When the recursion extends a concept by attribute `j`, the closure of
//! the restricted extent may pull in further attributes as a side effect.
//! If any of those lie *below* `j`, the same concept is also reachable by
//! adding that smaller attribute first, and that earlier path is the one
//! that counts. A candidate is canonical iff closure introduced nothing
//! new below `j`: the parent intent and the derived child intent must
//! agree bit-for-bit on indices `0..j`.
//!
//! Only the prefix below `j` is compared. Comparing over the full
//! attribute range would wrongly reject every extension (the child always
//! differs at `j` itself), which is the known defect of an early revision
//! of the C source and is deliberately not reproduced here.

use crate::sets::Intent;

/// Decide whether extending `parent_intent` by attribute `attr_index`
/// reached `child_intent` along its canonical generation path.
///
/// `child_intent` is the closed intent of the restricted extent. Returns
/// true iff both intents agree on every index strictly below
/// `attr_index`. In particular, if neither intent has any attribute below
/// `attr_index` the candidate is trivially canonical, and if closure
/// introduced or dropped attributes below the boundary asymmetrically it
/// is not.
pub fn is_canonical(parent_intent: &Intent, child_intent: &Intent, attr_index: usize) -> bool {
    parent_intent.eq_below(child_intent, attr_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::BitSet;

    fn intent(capacity: usize, members: &[usize]) -> BitSet {
        let mut set = BitSet::empty(capacity);
        for &m in members {
            set.insert(m);
        }
        set
    }

    #[test]
    fn test_both_prefixes_empty_is_canonical() {
        // Nothing below the boundary on either side: accept.
        let parent = intent(6, &[4]);
        let child = intent(6, &[3, 4]);
        assert!(is_canonical(&parent, &child, 3));
    }

    #[test]
    fn test_closure_introduced_smaller_attribute_rejected() {
        // Closing after adding attribute 3 dragged in attribute 1, so the
        // concept is generated earlier via attribute 1: reject here.
        let parent = intent(6, &[]);
        let child = intent(6, &[1, 3]);
        assert!(!is_canonical(&parent, &child, 3));
    }

    #[test]
    fn test_asymmetric_prefixes_rejected() {
        // Only one side populated below the boundary: reject either way.
        let parent = intent(6, &[0]);
        let child = intent(6, &[3]);
        assert!(!is_canonical(&parent, &child, 3));

        let parent = intent(6, &[]);
        let child = intent(6, &[2, 3]);
        assert!(!is_canonical(&parent, &child, 3));
    }

    #[test]
    fn test_identical_prefixes_accepted() {
        // Both prefixes non-empty and identical: accept.
        let parent = intent(6, &[0, 2]);
        let child = intent(6, &[0, 2, 4]);
        assert!(is_canonical(&parent, &child, 4));
    }

    #[test]
    fn test_equal_cardinality_different_members_rejected() {
        // Same number of attributes below the boundary but not the same
        // attributes: not the same prefix, reject.
        let parent = intent(6, &[0, 2]);
        let child = intent(6, &[1, 2, 4]);
        assert!(!is_canonical(&parent, &child, 4));
    }

    #[test]
    fn test_divergence_at_or_above_boundary_ignored() {
        // The child always differs at attr_index itself; that must not
        // affect the test.
        let parent = intent(6, &[0]);
        let child = intent(6, &[0, 2, 5]);
        assert!(is_canonical(&parent, &child, 2));
    }

    #[test]
    fn test_boundary_zero_always_canonical() {
        let parent = intent(6, &[]);
        let child = intent(6, &[0, 4]);
        assert!(is_canonical(&parent, &child, 0));
    }
}
