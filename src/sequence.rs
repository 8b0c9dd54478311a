// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Results of a completed sequence run.
//!
//! The engine produces a [`SequenceRun`] per strategy: the digits themselves
//! plus everything the detector found along the way. Consumers index from
//! the end of the run ("the 3rd digit from the last", "the most recent
//! repeat"), so both collections expose 1-based from-last lookups that
//! return `None` instead of panicking when the run is too short.

use std::collections::BTreeSet;

use crate::detectors::Strategy;

/// One detected repeat and the window growth it triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatEvent {
    /// The repeated window, as comma-joined decimal digit values.
    pub pattern: String,
    /// Index of the first digit of the repeated window.
    pub position: usize,
    /// How many terms each subsequent sum draws on.
    pub new_term_count: usize,
}

/// A finished run for a single strategy.
#[derive(Debug, Clone, Default)]
pub struct SequenceRun {
    /// Every generated digit value, in order.
    pub sequence: Vec<u32>,
    /// Indices belonging to some detected repeat window, for display.
    pub repeat_positions: BTreeSet<usize>,
    /// Detected repeats, in detection order.
    pub repeat_events: Vec<RepeatEvent>,
}

impl SequenceRun {
    /// The `n`th digit counting from the end, 1-based: `n = 1` is the last
    /// digit. Returns `None` when `n` is 0 or exceeds the run length.
    pub fn digit_from_last(&self, n: usize) -> Option<u32> {
        let index = self.sequence.len().checked_sub(n)?;
        self.sequence.get(index).copied()
    }

    /// Index of the `n`th digit from the end, on the same 1-based scheme
    /// as [`digit_from_last`](Self::digit_from_last).
    pub fn index_from_last(&self, n: usize) -> Option<usize> {
        if n == 0 || n > self.sequence.len() {
            return None;
        }
        Some(self.sequence.len() - n)
    }

    /// The `n`th repeat event counting from the most recent, 1-based.
    pub fn event_from_last(&self, n: usize) -> Option<&RepeatEvent> {
        let index = self.repeat_events.len().checked_sub(n)?;
        self.repeat_events.get(index)
    }
}

/// Runs for both strategies. Modes that skip a strategy leave its slot
/// at the default empty run, so from-last lookups degrade to `None`
/// rather than misreporting the other strategy's digits.
#[derive(Debug, Clone, Default)]
pub struct RunPair {
    pub local: SequenceRun,
    pub global: SequenceRun,
}

impl RunPair {
    /// The run belonging to `strategy`.
    pub fn run(&self, strategy: Strategy) -> &SequenceRun {
        match strategy {
            Strategy::Local => &self.local,
            Strategy::Global => &self.global,
        }
    }

    /// Mutable access, used by the engine while filling the pair in.
    pub(crate) fn run_mut(&mut self, strategy: Strategy) -> &mut SequenceRun {
        match strategy {
            Strategy::Local => &mut self.local,
            Strategy::Global => &mut self.global,
        }
    }
}
