// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adaptive-window sequence engine.
//!
//! This module implements the generation loop shared by every detection
//! strategy. The engine extends the sequence one digit at a time: each new
//! digit is the digital root, in the configured base, of the sum of the
//! last `term_count` digits. The loop itself never decides what counts as
//! a repeat; that question goes through the [`Detector`] seam, so the same
//! engine drives both the local and the global strategy.
//!
//! # Algorithm
//!
//! Starting from the seed pair `[1, 1]` with a two-term window:
//!
//! 1. Generate the digital root of the current window sum and append it.
//! 2. Offer the trailing window to the detector, unless this digit is the
//!    one generated immediately after a repeat (that single step is
//!    suppressed).
//! 3. When the detector fires: record the repeated window and its
//!    position, widen the window by one term, and rebuild the running sum,
//!    which the widening invalidated.
//! 4. Stop once the sequence reaches the configured length. Detection
//!    still runs on the final digit.
//!
//! The window sum is maintained incrementally by [`window::WindowSum`] and
//! cross-checked against a from-scratch recomputation in debug builds.
//!
//! # Example
//!
//! ```
//! use efdr::config::{LengthSpec, Mode, RunConfig};
//! use efdr::detectors::Strategy;
//! use efdr::engine::SequenceEngine;
//!
//! let config = RunConfig::new(Mode::Local, 10, LengthSpec::Absolute(20)).unwrap();
//! let run = SequenceEngine::new(Strategy::Local, &config).run();
//! assert_eq!(run.sequence[..8], [1, 1, 2, 3, 5, 8, 4, 3]);
//! ```

pub mod detector;
mod window;

pub use detector::Detector;

use std::collections::BTreeSet;

use crate::config::RunConfig;
use crate::detectors::Strategy;
use crate::digits::{digital_root, join_digits};
use crate::sequence::{RepeatEvent, RunPair, SequenceRun};
use window::WindowSum;

/// Whether the next completed window is offered to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Normal operation: every completed window is checked.
    Growing,
    /// The single digit after a repeat is exempt from detection.
    Suppressed,
}

/// Drives one detection strategy over one run.
///
/// The engine is consumed by [`run`](SequenceEngine::run): a finished run
/// is a value, not a state you can accidentally extend.
pub struct SequenceEngine {
    base: u32,
    target_length: usize,

    /// Digits generated so far, seeded with `[1, 1]`.
    sequence: Vec<u32>,

    /// Width of the summation window. Grows by one per detected repeat.
    term_count: usize,

    phase: Phase,
    window_sum: WindowSum,
    detector: Box<dyn Detector>,

    repeat_positions: BTreeSet<usize>,
    repeat_events: Vec<RepeatEvent>,
}

impl SequenceEngine {
    /// Set up a run of `strategy` under `config`. The seed pair is
    /// truncated when the target length is shorter than it.
    pub fn new(strategy: Strategy, config: &RunConfig) -> Self {
        let mut sequence = vec![1, 1];
        sequence.truncate(config.length);
        let term_count = 2;
        let window_sum = WindowSum::new(&sequence, term_count);
        SequenceEngine {
            base: config.base,
            target_length: config.length,
            sequence,
            term_count,
            phase: Phase::Growing,
            window_sum,
            detector: strategy.detector(),
            repeat_positions: BTreeSet::new(),
            repeat_events: Vec::new(),
        }
    }

    /// Generate digits up to the target length and return the finished
    /// run. Consumes the engine.
    pub fn run(mut self) -> SequenceRun {
        while self.sequence.len() < self.target_length {
            self.step();
        }
        SequenceRun {
            sequence: self.sequence,
            repeat_positions: self.repeat_positions,
            repeat_events: self.repeat_events,
        }
    }

    /// Generate one digit and, unless suppressed, run detection on the
    /// window it completes.
    fn step(&mut self) {
        let digit = digital_root(self.window_sum.value(), self.base);
        self.sequence.push(digit);
        self.window_sum.absorb(&self.sequence, self.term_count);
        debug_assert!(
            self.window_sum.agrees_with(&self.sequence, self.term_count),
            "window sum diverged at length {}",
            self.sequence.len()
        );

        match self.phase {
            Phase::Suppressed => self.phase = Phase::Growing,
            Phase::Growing => self.detect(),
        }
    }

    fn detect(&mut self) {
        let window_start = self.sequence.len() - self.term_count;
        if !self
            .detector
            .check(&self.sequence, window_start, self.term_count)
        {
            return;
        }

        let window = &self.sequence[window_start..];
        self.repeat_positions
            .extend(window_start..self.sequence.len());
        self.repeat_events.push(RepeatEvent {
            pattern: join_digits(window),
            position: window_start,
            new_term_count: self.term_count + 1,
        });
        log::debug!(
            "{}: repeat {:?} at {}, widening window to {} terms",
            self.detector.name(),
            window,
            window_start,
            self.term_count + 1
        );
        self.detector.record_repeat(window);

        self.term_count += 1;
        self.phase = Phase::Suppressed;
        self.window_sum.rebuild(&self.sequence, self.term_count);
    }
}

/// Run every strategy the configured mode selects, in mode order.
/// Strategies the mode skips are left as empty runs in the pair.
pub fn run(config: &RunConfig) -> RunPair {
    let mut runs = RunPair::default();
    for &strategy in config.mode.strategies() {
        log::info!(
            "running {} detection: base {}, {} digits",
            strategy,
            config.base,
            config.length
        );
        *runs.run_mut(strategy) = SequenceEngine::new(strategy, config).run();
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthSpec, Mode};

    /// The first 20 digits in base 10, during which neither strategy
    /// detects anything.
    const BASE_10_OPENING: [u32; 20] = [1, 1, 2, 3, 5, 8, 4, 3, 7, 1, 8, 9, 8, 8, 7, 6, 4, 1, 5, 6];

    fn config(base: u32, length: u32) -> RunConfig {
        RunConfig::new(Mode::Both, base, LengthSpec::Absolute(length)).unwrap()
    }

    #[test]
    fn test_base_10_opening_is_quiet() {
        for strategy in [Strategy::Local, Strategy::Global] {
            let run = SequenceEngine::new(strategy, &config(10, 20)).run();
            assert_eq!(run.sequence, BASE_10_OPENING, "{} digits", strategy);
            assert!(run.repeat_events.is_empty(), "{} events", strategy);
            assert!(run.repeat_positions.is_empty(), "{} positions", strategy);
        }
    }

    #[test]
    fn test_short_runs_truncate_seed() {
        let run = SequenceEngine::new(Strategy::Local, &config(10, 1)).run();
        assert_eq!(run.sequence, [1]);
        assert!(run.repeat_events.is_empty());

        let run = SequenceEngine::new(Strategy::Local, &config(10, 2)).run();
        assert_eq!(run.sequence, [1, 1]);
        assert!(run.repeat_events.is_empty());
    }

    #[test]
    fn test_first_base_10_repeat() {
        // The seed pair recurs at positions 24-25, widening the window to
        // three terms; the run continues under the wider window.
        let run = SequenceEngine::new(Strategy::Local, &config(10, 30)).run();
        assert_eq!(run.sequence[..20], BASE_10_OPENING);
        assert_eq!(run.sequence[20..], [2, 8, 1, 9, 1, 1, 2, 4, 7, 4]);
        assert_eq!(
            run.repeat_events,
            vec![RepeatEvent {
                pattern: "1,1".to_string(),
                position: 24,
                new_term_count: 3,
            }]
        );
        assert_eq!(run.repeat_positions, BTreeSet::from([24, 25]));
    }

    #[test]
    fn test_global_matches_local_through_first_repeat() {
        // Up to 30 digits in base 10 the only repeat is the seed pair,
        // which both strategies detect identically.
        let local = SequenceEngine::new(Strategy::Local, &config(10, 30)).run();
        let global = SequenceEngine::new(Strategy::Global, &config(10, 30)).run();
        assert_eq!(local.sequence, global.sequence);
        assert_eq!(local.repeat_events, global.repeat_events);
    }

    #[test]
    fn test_base_2_fires_every_other_step() {
        // In base 2 every digit is 1, so each strategy fires on every
        // eligible step, with exactly one suppressed step in between.
        for strategy in [Strategy::Local, Strategy::Global] {
            let run = SequenceEngine::new(strategy, &config(2, 9)).run();
            assert_eq!(run.sequence, [1; 9], "{} digits", strategy);

            let expected: Vec<RepeatEvent> = [
                ("1,1", 1, 3),
                ("1,1,1", 2, 4),
                ("1,1,1,1", 3, 5),
                ("1,1,1,1,1", 4, 6),
            ]
            .into_iter()
            .map(|(pattern, position, new_term_count)| RepeatEvent {
                pattern: pattern.to_string(),
                position,
                new_term_count,
            })
            .collect();
            assert_eq!(run.repeat_events, expected, "{} events", strategy);
            assert_eq!(
                run.repeat_positions,
                (1..=8).collect::<BTreeSet<_>>(),
                "{} positions",
                strategy
            );
        }
    }

    #[test]
    fn test_mode_selects_strategies() {
        let runs = run(&config(10, 20));
        assert_eq!(runs.local.sequence, BASE_10_OPENING);
        assert_eq!(runs.global.sequence, BASE_10_OPENING);

        let local_only = run(&RunConfig::new(Mode::Local, 10, LengthSpec::Absolute(20)).unwrap());
        assert_eq!(local_only.local.sequence, BASE_10_OPENING);
        assert!(local_only.global.sequence.is_empty());

        let global_only = run(&RunConfig::new(Mode::Global, 10, LengthSpec::Absolute(20)).unwrap());
        assert!(global_only.local.sequence.is_empty());
        assert_eq!(global_only.global.sequence, BASE_10_OPENING);
    }
}
