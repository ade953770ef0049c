//! Normalization helpers for the compact notations of the two-line element format.
//!
//! Drag and mean-motion derivative terms are written with an **assumed decimal point**
//! and an **assumed power-of-ten marker** (`"-11606-4"` means `-0.11606e-4`); the
//! eccentricity has an assumed leading decimal point (`"0006703"` means `0.0006703`).
//! [`normalize_float`] rewrites such a field into a string the standard float parser
//! accepts.
use crate::constants::{TLE_LINE_LEN, LAST_TWO_DIGIT_YEAR_OF_2000S};

/// Insert the implied decimal point and exponent marker into a numeric field.
///
/// Rules, applied to the trimmed field:
/// 1. without a `.`, one is inserted right after a leading sign, or at the start; a
///    leading `+` is dropped;
/// 2. the last `-` (or, failing that, the last `+`) found after the first character
///    is an exponent sign: an `e` is inserted in front of it.
///
/// Arguments
/// -----------------
/// * `field`: the raw field text.
///
/// Return
/// ----------
/// * The rewritten field, e.g. `"00000-0"` → `".00000e-0"`, `"-11606-4"` → `"-.11606e-4"`.
pub fn normalize_float(field: &str) -> String {
    let field = field.trim();

    let mut s = if field.contains('.') {
        field.to_string()
    } else if let Some(unsigned) = field.strip_prefix('-') {
        format!("-.{unsigned}")
    } else if let Some(unsigned) = field.strip_prefix('+') {
        format!(".{unsigned}")
    } else {
        format!(".{field}")
    };

    if s.contains(['e', 'E']) {
        return s;
    }

    let exponent_sign = match (s.rfind('-'), s.rfind('+')) {
        (Some(i), _) if i > 0 => Some(i),
        (_, Some(i)) if i > 0 => Some(i),
        _ => None,
    };

    if let Some(i) = exponent_sign {
        s.insert(i, 'e');
    }
    s
}

/// Expand a two-digit year: 57–99 → 1957–1999, 00–56 → 2000–2056.
pub fn expand_year(two_digit_year: u32) -> u32 {
    if two_digit_year > LAST_TWO_DIGIT_YEAR_OF_2000S {
        1900 + two_digit_year
    } else {
        2000 + two_digit_year
    }
}

/// Modulo-10 checksum of a data line: digits add their value, `-` adds one,
/// every other character adds nothing. Only the columns before the checksum
/// column are considered.
pub fn line_checksum(line: &str) -> u32 {
    line.chars()
        .take(TLE_LINE_LEN - 1)
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum::<u32>()
        % 10
}
