//! Integer and float literals.
//!
//! The grammars are checked by hand before delegating to `str::parse`, so that
//! forms the standard parsers accept but configuration files must not
//! (`inf`, `NaN`, `infinity`) are rejected up front.

use crate::validate::Rejection;

/// Parses `[+-]?[0-9]+` into an `i64`.
pub(crate) fn parse_integer(raw: &str) -> Result<i64, Rejection> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::NotAnInteger);
    }
    // Grammar is already checked, so the only failure left is overflow.
    raw.parse::<i64>().map_err(|_| Rejection::OutOfRange)
}

/// Parses an integer that must be `>= 0`.
pub(crate) fn parse_nonnegative_integer(raw: &str) -> Result<i64, Rejection> {
    let value = parse_integer(raw)?;
    if value < 0 {
        return Err(Rejection::Negative);
    }
    Ok(value)
}

/// Parses `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?` into a finite `f64`.
pub(crate) fn parse_float(raw: &str) -> Result<f64, Rejection> {
    if !is_float_literal(raw) {
        return Err(Rejection::NotAFloat);
    }
    let value = raw.parse::<f64>().map_err(|_| Rejection::NotAFloat)?;
    if !value.is_finite() {
        return Err(Rejection::NotFinite);
    }
    Ok(value)
}

/// Parses a float that must be `>= 0`. Negative zero counts as zero.
pub(crate) fn parse_nonnegative_float(raw: &str) -> Result<f64, Rejection> {
    let value = parse_float(raw)?;
    if value < 0.0 {
        return Err(Rejection::Negative);
    }
    Ok(value)
}

fn is_float_literal(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
