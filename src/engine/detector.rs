// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The detection seam between the engine and its strategies.
//!
//! The generation loop is identical for every strategy; only the question
//! "does the window that just completed count as a repeat?" differs. The
//! [`Detector`] trait captures exactly that question, so the engine is
//! written once and each strategy is a small stateful object behind it.
//!
//! # Lifecycle
//!
//! For every step that is eligible for detection (all steps except the one
//! immediately after a repeat), the engine calls [`check`](Detector::check)
//! with the full sequence and the bounds of the trailing window. If the
//! detector answers `true`, the engine records the repeat, widens the
//! window, and then calls [`record_repeat`](Detector::record_repeat) with
//! the window that fired, letting the detector update whatever state its
//! next answer depends on.
//!
//! A detector may mutate itself during `check`: the global strategy
//! registers every window it rejects, so rejection is itself a state
//! change.

/// One repeat-detection strategy, driven by the engine.
pub trait Detector {
    /// Decide whether the trailing window `sequence[window_start..]`
    /// (exactly `term_count` digits) constitutes a repeat.
    ///
    /// Called at most once per generated digit, never for the digit
    /// generated immediately after a previous repeat.
    fn check(&mut self, sequence: &[u32], window_start: usize, term_count: usize) -> bool;

    /// Observe the window that just fired. Called once after each `check`
    /// that returned `true`, before any further `check` calls.
    ///
    /// The default does nothing; strategies whose next decision depends on
    /// the previous repeat override it.
    fn record_repeat(&mut self, _window: &[u32]) {}

    /// Short lowercase name for log lines.
    fn name(&self) -> &'static str;
}
