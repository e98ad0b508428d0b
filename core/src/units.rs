//! # Base-Unit Conversion
//!
//! On-chain amounts are integers in the token's smallest unit (wei for
//! ETH). Humans type and read decimals. This module converts between the
//! two without ever going through floating point, so `"0.1"` ether is
//! exactly `100000000000000000` wei and back again.
//!
//! Parsing rounds half-up when the input carries more fractional digits
//! than the token supports. Wallet UIs routinely let users type more
//! precision than the chain can store; rejecting those inputs would be
//! hostile.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

use crate::config::DEFAULT_DECIMALS;

/// Errors that can occur while parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing but whitespace.
    #[error("amount is empty")]
    Empty,

    /// Not a plain decimal number (`123`, `1.5`, `.5`, `2.`).
    #[error("invalid amount: {0:?}")]
    Invalid(String),

    /// Token amounts can't go below zero.
    #[error("amount must not be negative: {0:?}")]
    Negative(String),
}

/// `10^exp` as a `BigUint`.
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Renders a base-unit amount as an exact decimal string.
///
/// Trailing fractional zeros are trimmed, and a zero fraction drops the
/// decimal point entirely:
///
/// ```
/// use bluevault_core::{units::format_units, BigUint};
///
/// let wei = BigUint::from(1_500_000_000_000_000_000u64);
/// assert_eq!(format_units(&wei, 18), "1.5");
/// assert_eq!(format_units(&BigUint::from(42u32), 0), "42");
/// ```
pub fn format_units(value: &BigUint, decimals: u32) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let divisor = pow10(decimals);
    let whole = value / &divisor;
    let frac = value % &divisor;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// [`format_units`] with 18 decimals.
pub fn format_ether(value: &BigUint) -> String {
    format_units(value, DEFAULT_DECIMALS)
}

/// Parses a decimal string into base units.
///
/// Accepts `123`, `1.5`, `.5` and `2.`, with surrounding whitespace.
/// Fractional digits beyond `decimals` are rounded half-up.
pub fn parse_units(text: &str, decimals: u32) -> Result<BigUint, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative(trimmed.to_string()));
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }

    let scale = decimals as usize;
    let (kept, dropped) = if frac.len() > scale {
        frac.split_at(scale)
    } else {
        (frac, "")
    };

    let mut digits = String::with_capacity(whole.len() + scale);
    digits.push_str(whole);
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(scale - kept.len()));

    let mut value = if digits.is_empty() {
        BigUint::zero()
    } else {
        digits
            .parse::<BigUint>()
            .map_err(|_| AmountError::Invalid(trimmed.to_string()))?
    };
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        value += 1u32;
    }
    Ok(value)
}

/// [`parse_units`] with 18 decimals.
pub fn parse_ether(text: &str) -> Result<BigUint, AmountError> {
    parse_units(text, DEFAULT_DECIMALS)
}

pub fn add_amounts(a: &BigUint, b: &BigUint) -> BigUint {
    a + b
}

/// `a - b`, floored at zero. Balances can't go negative, and a display
/// that briefly shows a stale larger withdrawal shouldn't panic.
pub fn sub_amounts(a: &BigUint, b: &BigUint) -> BigUint {
    if b >= a {
        BigUint::zero()
    } else {
        a - b
    }
}

// ---------------------------------------------------------------------------
// Serde helper: BigUint as a base-10 string
// ---------------------------------------------------------------------------

/// Serde helper for serializing a base-unit `BigUint` as a decimal string.
///
/// JSON numbers lose precision past 2^53 in most consumers, and wei
/// amounts blow through that at 0.009 ETH. Strings survive the trip.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Deposit {
///     #[serde(with = "crate::units::decimal_string")]
///     amount: BigUint,
/// }
/// ```
pub mod decimal_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<BigUint>().map_err(serde::de::Error::custom)
    }
}
