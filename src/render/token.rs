// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Token syntax for the output template language.
//!
//! A token is introduced by `@@` and consists of the maximal following run
//! of ASCII letters, digits and square brackets. Within that run, the
//! first `[digits]` group names a 1-based from-last count `n` and is
//! removed; whatever remains must match one of the [`ValueCode`] spellings
//! exactly, case included, or the token renders as nothing.
//!
//! The grammar is deliberately forgiving about placement: `@@dsfl[2]`,
//! `@@[2]dsfl` and `@@ds[2]fl` all name the same lookup.

use strum_macros::EnumString;

/// The recognized value codes. Lowercase initial letters read the local
/// run, uppercase the global run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub(crate) enum ValueCode {
    /// The numeric base.
    #[strum(serialize = "b")]
    Base,
    /// The configured digit count.
    #[strum(serialize = "d")]
    DigitCount,
    /// The `n`th digit from the end of the sequence.
    #[strum(serialize = "dsfl")]
    LocalDigitFromLast,
    #[strum(serialize = "Dsfl")]
    GlobalDigitFromLast,
    /// The index of the `n`th digit from the end, as raw signed
    /// arithmetic: out-of-range counts yield negative numbers rather
    /// than nothing.
    #[strum(serialize = "pdsfl")]
    LocalPositionFromLast,
    #[strum(serialize = "pDsfl")]
    GlobalPositionFromLast,
    /// The position of the `n`th most recent repeat.
    #[strum(serialize = "rpos")]
    LocalRepeatPosition,
    #[strum(serialize = "Rpos")]
    GlobalRepeatPosition,
    /// The repeated pattern of the `n`th most recent repeat.
    #[strum(serialize = "rpat")]
    LocalRepeatPattern,
    #[strum(serialize = "Rpat")]
    GlobalRepeatPattern,
    /// The term count adopted after the `n`th most recent repeat.
    #[strum(serialize = "rntc")]
    LocalRepeatTermCount,
    #[strum(serialize = "Rntc")]
    GlobalRepeatTermCount,
}

/// Length in bytes of the token run at the start of `s`: ASCII
/// alphanumerics and square brackets. All run characters are ASCII, so
/// the length is always a char boundary.
pub(crate) fn token_run_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'[' || *b == b']')
        .count()
}

/// Split a token into its code text and from-last count.
///
/// The first `[digits]` group, wherever it sits in the token, supplies
/// the count and is removed; without one the count defaults to 1. A
/// bracket pair that is empty, non-numeric, or too large to hold in a
/// `usize` is not a group and stays part of the code text.
pub(crate) fn extract_count(token: &str) -> (String, usize) {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            let digits_start = i + 1;
            let mut j = digits_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > digits_start && j < bytes.len() && bytes[j] == b']' {
                if let Ok(n) = token[digits_start..j].parse::<usize>() {
                    let mut code = String::with_capacity(token.len());
                    code.push_str(&token[..i]);
                    code.push_str(&token[j + 1..]);
                    return (code, n);
                }
            }
        }
        i += 1;
    }
    (token.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_run_len() {
        assert_eq!(token_run_len("dsfl[1] rest"), 7);
        assert_eq!(token_run_len("b"), 1);
        assert_eq!(token_run_len("@b"), 0);
        assert_eq!(token_run_len(""), 0);
        assert_eq!(token_run_len("Rpat]x!"), 5);
    }

    #[test]
    fn test_extract_count_default() {
        assert_eq!(extract_count("dsfl"), ("dsfl".to_string(), 1));
        assert_eq!(extract_count(""), (String::new(), 1));
    }

    #[test]
    fn test_extract_count_group_anywhere() {
        assert_eq!(extract_count("dsfl[2]"), ("dsfl".to_string(), 2));
        assert_eq!(extract_count("[2]dsfl"), ("dsfl".to_string(), 2));
        assert_eq!(extract_count("ds[10]fl"), ("dsfl".to_string(), 10));
        assert_eq!(extract_count("[5]"), (String::new(), 5));
    }

    #[test]
    fn test_extract_count_only_first_group() {
        assert_eq!(extract_count("dsfl[2][3]"), ("dsfl[3]".to_string(), 2));
    }

    #[test]
    fn test_extract_count_rejects_malformed_groups() {
        assert_eq!(extract_count("dsfl[]"), ("dsfl[]".to_string(), 1));
        assert_eq!(extract_count("dsfl[a]"), ("dsfl[a]".to_string(), 1));
        assert_eq!(extract_count("dsfl[2a]"), ("dsfl[2a]".to_string(), 1));
        assert_eq!(extract_count("dsfl[2"), ("dsfl[2".to_string(), 1));
    }

    #[test]
    fn test_extract_count_skips_oversized_group() {
        let token = "dsfl[99999999999999999999999999]";
        assert_eq!(extract_count(token), (token.to_string(), 1));
        // A later well-formed group still counts.
        assert_eq!(
            extract_count("ds[99999999999999999999999999]fl[3]"),
            ("ds[99999999999999999999999999]fl".to_string(), 3)
        );
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!("dsfl".parse::<ValueCode>(), Ok(ValueCode::LocalDigitFromLast));
        assert_eq!("Dsfl".parse::<ValueCode>(), Ok(ValueCode::GlobalDigitFromLast));
        assert!("DSFL".parse::<ValueCode>().is_err());
        assert!("B".parse::<ValueCode>().is_err());
        assert!("".parse::<ValueCode>().is_err());
        assert!("dsflx".parse::<ValueCode>().is_err());
    }
}
