// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Template rendering for machine-readable output.
//!
//! A format string is literal text with embedded `@@` tokens; rendering
//! replaces each token with a value drawn from the configuration or the
//! finished runs and passes everything else through untouched. The token
//! syntax lives in [`token`]; this module walks the format string and
//! evaluates the codes.
//!
//! Lookups are best effort. A token that names nothing, an out-of-range
//! from-last count, or a run the configured mode never produced all
//! render as the empty string; only the position codes (`pdsfl`, `pDsfl`)
//! report out-of-range counts, as raw negative arithmetic. `@@` followed
//! by no token characters renders as nothing, which makes `@@@b` the way
//! to write a literal `@b`.
//!
//! # Example
//!
//! ```
//! use efdr::config::{LengthSpec, Mode, RunConfig};
//! use efdr::render::render;
//! use efdr::sequence::RunPair;
//!
//! let config = RunConfig::new(Mode::Local, 7, LengthSpec::Absolute(10)).unwrap();
//! let runs = RunPair::default();
//! assert_eq!(render("base is @@b", &config, &runs), "base is 7");
//! ```

mod token;

use crate::config::RunConfig;
use crate::sequence::{RepeatEvent, RunPair, SequenceRun};
use token::{extract_count, token_run_len, ValueCode};

/// Render `format` against a finished pair of runs.
pub fn render(format: &str, config: &RunConfig, runs: &RunPair) -> String {
    let mut output = String::with_capacity(format.len());
    let mut rest = format;
    while let Some(at) = rest.find("@@") {
        output.push_str(&rest[..at]);
        let after = &rest[at + 2..];
        let token_len = token_run_len(after);
        output.push_str(&evaluate_token(&after[..token_len], config, runs));
        rest = &after[token_len..];
    }
    output.push_str(rest);
    output
}

fn evaluate_token(token: &str, config: &RunConfig, runs: &RunPair) -> String {
    let (code, n) = extract_count(token);
    let Ok(code) = code.parse::<ValueCode>() else {
        return String::new();
    };

    match code {
        ValueCode::Base => config.base.to_string(),
        ValueCode::DigitCount => config.length.to_string(),
        ValueCode::LocalDigitFromLast => digit_text(&runs.local, n),
        ValueCode::GlobalDigitFromLast => digit_text(&runs.global, n),
        ValueCode::LocalPositionFromLast => position_text(&runs.local, n),
        ValueCode::GlobalPositionFromLast => position_text(&runs.global, n),
        ValueCode::LocalRepeatPosition => event_text(&runs.local, n, |e| e.position.to_string()),
        ValueCode::GlobalRepeatPosition => event_text(&runs.global, n, |e| e.position.to_string()),
        ValueCode::LocalRepeatPattern => event_text(&runs.local, n, |e| e.pattern.clone()),
        ValueCode::GlobalRepeatPattern => event_text(&runs.global, n, |e| e.pattern.clone()),
        ValueCode::LocalRepeatTermCount => {
            event_text(&runs.local, n, |e| e.new_term_count.to_string())
        }
        ValueCode::GlobalRepeatTermCount => {
            event_text(&runs.global, n, |e| e.new_term_count.to_string())
        }
    }
}

fn digit_text(run: &SequenceRun, n: usize) -> String {
    run.digit_from_last(n)
        .map(|digit| digit.to_string())
        .unwrap_or_default()
}

/// Raw signed index of the `n`th digit from the end. Unlike the digit
/// lookup this never goes empty: a count past the start of the run comes
/// out negative.
fn position_text(run: &SequenceRun, n: usize) -> String {
    (run.sequence.len() as i128 - n as i128).to_string()
}

fn event_text(run: &SequenceRun, n: usize, field: impl Fn(&RepeatEvent) -> String) -> String {
    run.event_from_last(n).map(field).unwrap_or_default()
}
