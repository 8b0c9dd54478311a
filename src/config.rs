// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated run configuration.
//!
//! The command-line front end (or any other caller) builds a [`RunConfig`]
//! before touching the engine. Construction is the single validation point:
//! a `RunConfig` that exists is always safe to generate from, so the engine
//! itself never re-checks the base or the length.
//!
//! The requested length can be given as an absolute digit count or as an
//! offset from the base (`+3` means `base + 3`, `-2` means `base - 2`),
//! which is convenient when comparing the same relative run across bases.

use std::str::FromStr;

use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::detectors::Strategy;

/// Which detection strategies a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Local detection only.
    Local,
    /// Global detection only.
    Global,
    /// Both strategies, local first.
    Both,
}

impl Mode {
    /// The strategies this mode runs, in execution order.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Mode::Local => &[Strategy::Local],
            Mode::Global => &[Strategy::Global],
            Mode::Both => &[Strategy::Local, Strategy::Global],
        }
    }
}

/// A requested sequence length, before resolution against the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthSpec {
    /// An absolute digit count, e.g. `120`.
    Absolute(u32),
    /// An offset from the base, e.g. `+30` or `-2`.
    FromBase(i64),
}

impl LengthSpec {
    fn requested(self, base: u32) -> i64 {
        match self {
            LengthSpec::Absolute(count) => count as i64,
            LengthSpec::FromBase(offset) => base as i64 + offset,
        }
    }
}

impl FromStr for LengthSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = if let Some(rest) = s.strip_prefix('+') {
            parse_digits(rest).map(|n| LengthSpec::FromBase(n as i64))
        } else if let Some(rest) = s.strip_prefix('-') {
            parse_digits(rest).map(|n| LengthSpec::FromBase(-(n as i64)))
        } else {
            parse_digits(s).map(LengthSpec::Absolute)
        };
        spec.ok_or_else(|| ConfigError::BadLengthSpec {
            input: s.to_string(),
        })
    }
}

/// Parse a non-empty all-digit string. Rejects embedded signs, so `++3`
/// and `-+2` fail rather than sneaking through integer parsing.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Validated inputs for one invocation: mode, base, resolved length.
///
/// # Example
///
/// ```
/// use efdr::{LengthSpec, Mode, RunConfig};
///
/// let config = RunConfig::new(Mode::Both, 16, LengthSpec::FromBase(3)).unwrap();
/// assert_eq!(config.length, 19);
///
/// assert!(RunConfig::new(Mode::Local, 1, LengthSpec::Absolute(10)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Which strategies to run.
    pub mode: Mode,
    /// Numeric base, at least 2.
    pub base: u32,
    /// Resolved target sequence length, at least 1.
    pub length: usize,
}

impl RunConfig {
    /// Build a validated configuration, resolving the length against the
    /// base. Rejects bases below 2 and lengths below 1.
    pub fn new(mode: Mode, base: u32, length: LengthSpec) -> Result<Self, ConfigError> {
        if base < 2 {
            return Err(ConfigError::BaseTooSmall { base });
        }
        let requested = length.requested(base);
        if requested <= 0 {
            return Err(ConfigError::NonPositiveLength { requested });
        }
        Ok(Self {
            mode,
            base,
            length: requested as usize,
        })
    }
}

/// Why a configuration was rejected. All variants are fatal to the run;
/// nothing downstream retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The digital root needs at least two digit values to work with.
    #[error("base must be at least 2 (got {base})")]
    BaseTooSmall { base: u32 },

    /// The resolved digit count was zero or negative, e.g. `-12` with
    /// base 10 resolves to -2.
    #[error("digit count must be > 0 (got {requested})")]
    NonPositiveLength { requested: i64 },

    /// The length argument was not a count or a base offset.
    #[error("invalid digit count '{input}': expected a count like 120 or an offset like +30 or -2")]
    BadLengthSpec { input: String },
}
