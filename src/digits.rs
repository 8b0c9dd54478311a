// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digital-root arithmetic and digit-list formatting.
//!
//! The digital root of a value in base `b` is obtained by summing its
//! base-`b` digits and repeating until a single digit remains. Rather than
//! iterating, we use the closed-form congruence identity: for `v > 0`,
//! `digitalRoot(v) = 1 + (v - 1) mod (b - 1)`, and `digitalRoot(0) = 0`.
//! The unit tests check this against an independent iterative
//! digit-summation implementation across a grid of bases.

/// Compute the digital root of `value` in the given base.
///
/// The result is always in `0..base`.
///
/// # Example
///
/// ```
/// use efdr::digits::digital_root;
///
/// assert_eq!(digital_root(0, 10), 0);
/// assert_eq!(digital_root(38, 10), 2); // 3+8 = 11, 1+1 = 2
/// assert_eq!(digital_root(255, 16), 15); // 0xFF -> 0x1E -> 0xF
/// ```
pub fn digital_root(value: u64, base: u32) -> u32 {
    debug_assert!(base >= 2, "digital root is undefined for base {}", base);
    if value == 0 {
        0
    } else {
        (1 + (value - 1) % (base as u64 - 1)) as u32
    }
}

/// Join digits into the canonical comma-separated pattern text, e.g.
/// `[1, 1, 2]` becomes `"1,1,2"`.
///
/// Digits are written in decimal whatever the base, so a base-16 window
/// containing the digit eleven renders as `"11"`, never as a letter.
pub fn join_digits(digits: &[u32]) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&digit.to_string());
    }
    out
}
