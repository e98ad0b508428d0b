//! # Input Validation
//!
//! Boolean predicates over raw user input. Every function here is total:
//! no panics, no errors, just `true` or `false`. Form components call
//! these on every keystroke, so "why" is the caller's job (see
//! [`crate::errors::messages`] for the strings).
//!
//! [`validate_unlock_time`] reads the wall clock, which means the same
//! input flips from valid to invalid as time passes. That is the point:
//! unlock times must be in the future *when the vault is created*. Tests
//! should use [`validate_unlock_time_at`] with a fixed `now`.

use chrono::Utc;

/// Whether `text` starts with a strictly positive number.
///
/// Reads the number the way a browser's `parseFloat` does: leading
/// whitespace is skipped and the longest numeric prefix is taken, so
/// `"1.5 ETH"` and `"1,000"` (read as `1`) both pass. `"Infinity"` is a
/// number and passes too. Input with no numeric prefix is invalid.
pub fn validate_amount(text: &str) -> bool {
    parse_float_prefix(text).is_some_and(|value| value > 0.0)
}

/// Longest leading decimal literal of `text`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an
/// optional exponent, or the literal `Infinity`. `None` when no digits
/// lead the input.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let whole_start = end;
    end = digits_from(end);
    let mut mantissa = end - whole_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa += frac_end - (end + 1);
        if mantissa > 0 {
            end = frac_end;
        }
    }
    if mantissa == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Whether `timestamp` (seconds since epoch) lies strictly in the future.
pub fn validate_unlock_time(timestamp: i64) -> bool {
    validate_unlock_time_at(timestamp, Utc::now().timestamp())
}

/// [`validate_unlock_time`] against an explicit `now`.
pub fn validate_unlock_time_at(timestamp: i64, now: i64) -> bool {
    timestamp > now
}

/// Whether `text` is syntactically valid JSON.
///
/// The shape isn't checked: `[]`, `42` and `"hi"` all pass. Use
/// [`crate::vault::parse_vault_metadata`] to get a typed record.
pub fn validate_metadata(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

/// Whether `text` looks like an EVM address: `0x` followed by exactly 40
/// hex digits, either case. The EIP-55 checksum is not verified.
pub fn is_valid_address(text: &str) -> bool {
    match text.strip_prefix("0x") {
        Some(body) => body.len() == 40 && hex::decode(body).is_ok(),
        None => false,
    }
}
