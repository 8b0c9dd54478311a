// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two repeat-detection strategies.
//!
//! Both strategies watch the trailing window of the sequence; they differ
//! in what they compare it against. The [`local`] strategy remembers only
//! the most recently repeated window and fires when the sequence ends with
//! it again. The [`global`] strategy remembers every window of the current
//! width it has ever seen, anywhere in the run, and fires on any
//! recurrence.
//!
//! [`Strategy`] is the value-level handle the configuration and report
//! layers pass around; [`Strategy::detector`] turns it into the stateful
//! object the engine drives.

pub mod global;
pub mod local;

use strum_macros::Display;

use crate::engine::detector::Detector;

pub use global::GlobalDetector;
pub use local::LocalDetector;

/// A repeat-detection strategy, as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    Local,
    Global,
}

impl Strategy {
    /// Uppercase label for report headers.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Local => "LOCAL",
            Strategy::Global => "GLOBAL",
        }
    }

    /// Build a fresh detector for this strategy.
    pub fn detector(self) -> Box<dyn Detector> {
        match self {
            Strategy::Local => Box::new(LocalDetector::new()),
            Strategy::Global => Box::new(GlobalDetector::new()),
        }
    }
}
