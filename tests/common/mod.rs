// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The exact digit values of long runs are impractical to table, so most
//! tests lean on structural invariants instead: properties that hold for
//! every valid run of either strategy, derived from how the engine and
//! the detectors operate.

use std::collections::BTreeSet;

use efdr::digits::join_digits;
use efdr::{LengthSpec, Mode, RunConfig, SequenceEngine, SequenceRun, Strategy};

/// Run a single strategy to `length` digits in `base`.
pub fn run_one(strategy: Strategy, base: u32, length: u32) -> SequenceRun {
    let config = RunConfig::new(Mode::Both, base, LengthSpec::Absolute(length))
        .expect("test configuration must be valid");
    SequenceEngine::new(strategy, &config).run()
}

/// The window a repeat event fired on: its width is one less than the
/// term count the event adopted.
pub fn event_window(run: &SequenceRun, index: usize) -> &[u32] {
    let event = &run.repeat_events[index];
    let width = event.new_term_count - 1;
    &run.sequence[event.position..event.position + width]
}

/// Structural invariants every finished run satisfies, whichever
/// strategy produced it.
pub fn assert_run_invariants(run: &SequenceRun, base: u32, requested: usize) {
    assert_eq!(
        run.sequence.len(),
        requested,
        "run must contain exactly the requested number of digits"
    );

    // Digits are digital roots of non-empty windows reaching back to the
    // non-zero seed, so zero can never appear.
    for (index, &digit) in run.sequence.iter().enumerate() {
        assert!(
            digit >= 1 && digit < base,
            "digit {} at index {} escapes 1..{}",
            digit,
            index,
            base
        );
    }

    let mut expected_positions = BTreeSet::new();
    let mut last_fire_length: Option<usize> = None;

    for (index, event) in run.repeat_events.iter().enumerate() {
        // Term counts start at 2 and grow by exactly one per repeat.
        assert_eq!(
            event.new_term_count,
            index + 3,
            "event {} adopted the wrong term count",
            index
        );

        let width = event.new_term_count - 1;
        let end = event.position + width;
        assert!(
            end <= run.sequence.len(),
            "event {} window [{}, {}) overruns the sequence",
            index,
            event.position,
            end
        );

        // The recorded pattern is the window text itself.
        assert_eq!(
            event.pattern,
            join_digits(event_window(run, index)),
            "event {} pattern does not match its window",
            index
        );

        // A repeat fires on the step that completes its window, and the
        // step after a repeat is suppressed, so consecutive fires are at
        // least two digits apart.
        if let Some(previous) = last_fire_length {
            assert!(
                end >= previous + 2,
                "events {} and {} fired closer than the suppressed step allows",
                index - 1,
                index
            );
        }
        last_fire_length = Some(end);

        expected_positions.extend(event.position..end);
    }

    assert_eq!(
        run.repeat_positions, expected_positions,
        "highlighted positions must be exactly the union of event windows"
    );
}

/// Local-strategy invariant: each repeat is defined by the previous one.
/// The first fired window is the seed pair, and every later fired window
/// ends with the digits of the window before it.
pub fn assert_local_chaining(run: &SequenceRun) {
    if run.repeat_events.is_empty() {
        return;
    }

    assert_eq!(
        event_window(run, 0),
        [1, 1],
        "the first local repeat is always the seed pair"
    );

    for index in 1..run.repeat_events.len() {
        let previous = event_window(run, index - 1).to_vec();
        let current = event_window(run, index);
        assert_eq!(
            &current[1..],
            previous,
            "local event {} does not end with the previous repeat",
            index
        );
    }
}

/// Global-strategy invariant: every fired window recurs, i.e. the same
/// digit content occurs as a window starting strictly earlier.
pub fn assert_global_recurrence(run: &SequenceRun) {
    for (index, event) in run.repeat_events.iter().enumerate() {
        let window = event_window(run, index);
        let width = window.len();
        let found = (0..event.position)
            .any(|start| &run.sequence[start..start + width] == window);
        assert!(
            found,
            "global event {} at position {} has no earlier occurrence of {:?}",
            index, event.position, window
        );
    }
}
