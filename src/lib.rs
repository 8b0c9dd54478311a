// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Evolving Fibonacci digital-root sequences.
//!
//! Starting from the seed pair `[1, 1]`, each new digit is the digital
//! root, in a configurable base, of the sum of the last `term_count`
//! digits. The window starts two terms wide and grows: whenever a
//! detection strategy decides the trailing window repeats earlier
//! material, the term count goes up by one and generation continues.
//! The digit generated immediately after a repeat is exempt from
//! detection, so consecutive repeats are always at least two steps apart.
//!
//! Two strategies exist. *Local* detection compares the end of the
//! sequence against the most recently repeated window; *global* detection
//! remembers every window of the current width seen anywhere in the run.
//!
//! # Architecture
//!
//! The crate is a pipeline of small modules:
//!
//! - [`config`] validates the mode, base and requested length once, up
//!   front; everything downstream trusts the result.
//! - [`digits`] holds the digital-root arithmetic.
//! - [`engine`] runs the generation loop, identical for every strategy,
//!   behind the [`engine::Detector`] seam.
//! - [`detectors`] implements the local and global strategies.
//! - [`sequence`] is the output side: finished runs, repeat events, and
//!   from-last lookups.
//! - [`render`] substitutes `@@` value tokens into a format string for
//!   machine-readable output.
//!
//! # Example
//!
//! ```
//! use efdr::{LengthSpec, Mode, RunConfig};
//!
//! let config = RunConfig::new(Mode::Local, 10, LengthSpec::Absolute(20)).unwrap();
//! let runs = efdr::run(&config);
//!
//! assert_eq!(runs.local.sequence[..8], [1, 1, 2, 3, 5, 8, 4, 3]);
//! // The first repeat in base 10 does not arrive until position 24.
//! assert!(runs.local.repeat_events.is_empty());
//! ```

pub mod config;
pub mod detectors;
pub mod digits;
pub mod engine;
pub mod render;
pub mod sequence;

// Re-export commonly used types
pub use config::{ConfigError, LengthSpec, Mode, RunConfig};
pub use detectors::Strategy;
pub use digits::digital_root;
pub use engine::{run, SequenceEngine};
pub use render::render;
pub use sequence::{RepeatEvent, RunPair, SequenceRun};
