//! Basis-point fee math.
//!
//! The contract takes its protocol fee on deposit. The frontend mirrors
//! the computation so the confirmation dialog can show the net amount
//! before the user signs. Integer floor division, same as the contract.

use num_bigint::BigUint;
use thiserror::Error;

use crate::config::{BASIS_POINTS, MAX_FEE_BPS, PROTOCOL_FEE_BPS};
use crate::units::sub_amounts;

/// Fee computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// Requested rate exceeds what the contract would ever charge.
    #[error("fee rate {bps} bps exceeds maximum of {max} bps")]
    RateTooHigh {
        /// The rate that was asked for.
        bps: u32,
        /// The ceiling.
        max: u32,
    },
}

/// Fee at an arbitrary rate, rejecting rates above [`MAX_FEE_BPS`].
pub fn fee_for_rate(amount: &BigUint, bps: u32) -> Result<BigUint, FeeError> {
    if bps > MAX_FEE_BPS {
        return Err(FeeError::RateTooHigh {
            bps,
            max: MAX_FEE_BPS,
        });
    }
    Ok(amount * bps / BASIS_POINTS)
}

/// Protocol fee on `amount` at [`PROTOCOL_FEE_BPS`].
pub fn calculate_fee(amount: &BigUint) -> BigUint {
    amount * PROTOCOL_FEE_BPS / BASIS_POINTS
}

/// What actually lands in the vault after the protocol fee.
pub fn amount_after_fee(amount: &BigUint) -> BigUint {
    sub_amounts(amount, &calculate_fee(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_protocol_fee_is_half_a_percent() {
        assert_eq!(calculate_fee(&big(10_000)), big(50));
        assert_eq!(calculate_fee(&big(1_000_000_000_000_000_000)), big(5_000_000_000_000_000));
        assert_eq!(amount_after_fee(&big(10_000)), big(9_950));
    }

    #[test]
    fn test_fee_floors() {
        // 199 * 50 / 10_000 = 0.995 -> 0
        assert_eq!(calculate_fee(&big(199)), big(0));
        assert_eq!(calculate_fee(&big(200)), big(1));
    }

    #[test]
    fn test_custom_rates() {
        assert_eq!(fee_for_rate(&big(10_000), 0), Ok(big(0)));
        assert_eq!(fee_for_rate(&big(10_000), 200), Ok(big(200)));
        assert_eq!(
            fee_for_rate(&big(10_000), 201),
            Err(FeeError::RateTooHigh { bps: 201, max: 200 })
        );
    }
}
