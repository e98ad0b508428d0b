//! Balance formatting with a fixed number of fractional digits.
//!
//! Scaling is exact: the base-unit integer is rescaled to the display
//! precision in integer arithmetic and rounded half-up on the digit that
//! falls off. `1 wei` shown with 4 decimals is `"0.0000"`, and
//! `0.00005 ETH` is `"0.0001"`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::{DEFAULT_DECIMALS, DEFAULT_DISPLAY_DECIMALS};
use crate::units::pow10;

/// Formats a base-unit amount with exactly `display_decimals` fractional
/// digits.
///
/// ```
/// use bluevault_core::{format::format_balance, BigUint};
///
/// let one_eth = BigUint::from(10u64.pow(18));
/// assert_eq!(format_balance(&one_eth, 18, 4), "1.0000");
/// assert_eq!(format_balance(&one_eth, 18, 2), "1.00");
/// ```
pub fn format_balance(value: &BigUint, decimals: u32, display_decimals: u32) -> String {
    let scaled = value * pow10(display_decimals);
    let divisor = pow10(decimals);
    let mut rounded = &scaled / &divisor;
    let remainder = &scaled % &divisor;
    if !remainder.is_zero() && remainder * 2u32 >= divisor {
        rounded += 1u32;
    }

    if display_decimals == 0 {
        return rounded.to_string();
    }
    let unit = pow10(display_decimals);
    let whole = &rounded / &unit;
    let frac = &rounded % &unit;
    format!(
        "{}.{:0>width$}",
        whole,
        frac.to_string(),
        width = display_decimals as usize
    )
}

/// [`format_balance`] with 18 decimals and 4 display digits.
pub fn format_ether_balance(value: &BigUint) -> String {
    format_balance(value, DEFAULT_DECIMALS, DEFAULT_DISPLAY_DECIMALS)
}

/// Formats an already-human ETH figure, e.g. `"0.2500 ETH"`.
pub fn format_eth(value: f64, decimals: usize) -> String {
    format!("{:.*} ETH", decimals, value)
}
