// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Global detection: has this window occurred anywhere before?
//!
//! Windows are bucketed by width, because a recurrence is only meaningful
//! between windows drawn under the same term count. The width-2 bucket is
//! seeded at construction with the seed pair `[1, 1]`; every other bucket
//! is built lazily the first time its width is consulted, by scanning all
//! complete windows of that width in the prefix of the sequence generated
//! so far.
//!
//! Window identity is structural. Keys are the digit values themselves,
//! not a joined string, so multi-digit values in large bases can never
//! alias (`[11, 2]` and `[1, 12]` are distinct keys no matter how they
//! would print).

use std::collections::{HashMap, HashSet};

use crate::engine::detector::Detector;

/// A window's digit content, usable as a hash key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WindowKey(Box<[u32]>);

impl From<&[u32]> for WindowKey {
    fn from(window: &[u32]) -> Self {
        WindowKey(window.into())
    }
}

/// Fires when the trailing window matches any earlier window of the same
/// width.
#[derive(Debug, Clone)]
pub struct GlobalDetector {
    seen: HashMap<usize, HashSet<WindowKey>>,
}

impl Default for GlobalDetector {
    fn default() -> Self {
        GlobalDetector::new()
    }
}

impl GlobalDetector {
    /// Start with the seed pair already registered at width 2.
    pub fn new() -> Self {
        let mut seen = HashMap::new();
        seen.insert(2, HashSet::from([WindowKey::from(&[1u32, 1][..])]));
        GlobalDetector { seen }
    }

    /// All windows of width `term_count` starting before `window_start`.
    /// Every such window is complete: it ends before the current one does.
    fn windows_in_prefix(
        sequence: &[u32],
        window_start: usize,
        term_count: usize,
    ) -> HashSet<WindowKey> {
        (0..window_start)
            .map(|start| WindowKey::from(&sequence[start..start + term_count]))
            .collect()
    }
}

impl Detector for GlobalDetector {
    fn check(&mut self, sequence: &[u32], window_start: usize, term_count: usize) -> bool {
        let bucket = self.seen.entry(term_count).or_insert_with(|| {
            let windows = Self::windows_in_prefix(sequence, window_start, term_count);
            log::trace!(
                "seeded width-{} bucket with {} prefix windows",
                term_count,
                windows.len()
            );
            windows
        });

        let key = WindowKey::from(&sequence[window_start..]);
        if bucket.contains(&key) {
            return true;
        }
        bucket.insert(key);
        false
    }

    fn name(&self) -> &'static str {
        "global"
    }
}
