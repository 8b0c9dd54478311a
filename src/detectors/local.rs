// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local detection: does the sequence end with the last repeated window?
//!
//! The detector carries a single end pattern. It starts as the seed pair
//! `[1, 1]`, and after every repeat it becomes the window that fired, so
//! each repeat is defined relative to the previous one. Because the
//! pattern is replaced wholesale, its length lags one behind the window
//! width: after the repeat that widened the window to `k` terms, the
//! pattern is the `k - 1` digits that fired.

use crate::engine::detector::Detector;

/// Fires when the sequence ends with the most recently repeated window.
#[derive(Debug, Clone)]
pub struct LocalDetector {
    end_pattern: Vec<u32>,
}

impl LocalDetector {
    pub fn new() -> Self {
        LocalDetector {
            end_pattern: vec![1, 1],
        }
    }
}

impl Default for LocalDetector {
    fn default() -> Self {
        LocalDetector::new()
    }
}

impl Detector for LocalDetector {
    fn check(&mut self, sequence: &[u32], _window_start: usize, term_count: usize) -> bool {
        sequence.len() > term_count && sequence.ends_with(&self.end_pattern)
    }

    fn record_repeat(&mut self, window: &[u32]) {
        self.end_pattern = window.to_vec();
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
