// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running sum over the trailing window of the sequence.
//!
//! Each generated digit is the digital root of the sum of the last
//! `term_count` digits. Recomputing that sum from the slice on every step
//! would make each step O(term_count); [`WindowSum`] keeps it O(1) by
//! absorbing the newly pushed digit and evicting the digit that slid out
//! of the window. When a repeat widens the window the incremental state is
//! invalid, so the engine rebuilds from the slice instead.

/// Sum of the last `term_count` digits of the sequence, maintained
/// incrementally.
///
/// The sum is over digit values below the base, so `u64` holds it for any
/// run that fits in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowSum(u64);

impl WindowSum {
    /// Sum the current trailing window from scratch. When the sequence is
    /// shorter than `term_count` the window is the whole sequence.
    pub(crate) fn new(sequence: &[u32], term_count: usize) -> Self {
        let start = sequence.len().saturating_sub(term_count);
        WindowSum(sequence[start..].iter().map(|&d| d as u64).sum())
    }

    pub(crate) fn value(&self) -> u64 {
        self.0
    }

    /// Fold the just-pushed last digit into the sum and evict the digit
    /// that left the window, if the sequence has outgrown it.
    ///
    /// Must be called exactly once per push, after the push.
    pub(crate) fn absorb(&mut self, sequence: &[u32], term_count: usize) {
        let len = sequence.len();
        self.0 += sequence[len - 1] as u64;
        if len > term_count {
            self.0 -= sequence[len - 1 - term_count] as u64;
        }
    }

    /// Recompute from the slice. Used when `term_count` changes, which
    /// invalidates the incremental state.
    pub(crate) fn rebuild(&mut self, sequence: &[u32], term_count: usize) {
        *self = WindowSum::new(sequence, term_count);
    }

    /// Whether the incremental sum matches a from-scratch recomputation.
    /// The engine checks this in debug builds after every absorb.
    pub(crate) fn agrees_with(&self, sequence: &[u32], term_count: usize) -> bool {
        *self == WindowSum::new(sequence, term_count)
    }
}
