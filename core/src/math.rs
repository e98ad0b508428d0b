//! # Progress & Percentage Math
//!
//! Small numeric helpers behind progress bars and summary cards. All of
//! them are total: a zero denominator or an empty input yields `0.0`
//! rather than `NaN`, because a progress bar has nowhere to put a `NaN`.
//!
//! [`calculate_progress`] is the only function that touches on-chain
//! amounts. It converts both sides to `f64` before dividing, so precision
//! degrades once the amounts exceed 2^53 base units. That's fine for a
//! percentage rendered with at most a couple of decimals.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Bounds `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: if `min > max` the result is
/// `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Sum of all values. Empty input sums to `0.0`.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean. Empty input averages to `0.0`.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// `value` as a percentage of `total`. A zero `total` yields `0.0`.
pub fn calculate_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

/// `percentage` percent of `value`.
pub fn apply_percentage(value: f64, percentage: f64) -> f64 {
    value * (percentage / 100.0)
}

/// Savings-goal progress in `[0, 100]`.
///
/// A zero goal reports `0.0`, not an error: a vault without a goal simply
/// has no progress to show. Overshooting the goal caps at `100.0`.
pub fn calculate_progress(current: &BigUint, goal: &BigUint) -> f64 {
    if goal.is_zero() {
        return 0.0;
    }
    // BigUint -> f64 saturates to infinity instead of failing for huge
    // values; the clamp below keeps the result in range either way.
    let current = current.to_f64().unwrap_or(f64::INFINITY);
    let goal = goal.to_f64().unwrap_or(f64::INFINITY);
    let progress = (current / goal) * 100.0;
    if progress.is_nan() {
        return 0.0;
    }
    clamp(progress, 0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_progress_basic_cases() {
        assert_eq!(calculate_progress(&big(50), &big(100)), 50.0);
        assert_eq!(calculate_progress(&big(0), &big(100)), 0.0);
        assert_eq!(calculate_progress(&big(100), &big(100)), 100.0);
    }

    #[test]
    fn test_progress_zero_goal_is_zero() {
        assert_eq!(calculate_progress(&big(50), &big(0)), 0.0);
        assert_eq!(calculate_progress(&big(0), &big(0)), 0.0);
    }

    #[test]
    fn test_progress_caps_at_hundred() {
        assert_eq!(calculate_progress(&big(150), &big(100)), 100.0);
    }

    #[test]
    fn test_progress_is_bounded_for_wide_inputs() {
        let samples = [0u64, 1, 7, 99, 100, 101, 12_345, u64::MAX];
        for &c in &samples {
            for &g in samples.iter().filter(|&&g| g > 0) {
                let p = calculate_progress(&big(c), &big(g));
                assert!((0.0..=100.0).contains(&p), "progress({c}, {g}) = {p}");
            }
        }
    }

    #[test]
    fn test_progress_handles_amounts_beyond_f64_range() {
        // 10^400 doesn't fit in an f64; both sides saturate and the
        // result must still land in range.
        let huge = BigUint::from(10u32).pow(400);
        let p = calculate_progress(&huge, &huge);
        assert!((0.0..=100.0).contains(&p));
        assert_eq!(calculate_progress(&huge, &big(1)), 100.0);
    }

    #[test]
    fn test_progress_with_wei_amounts() {
        let one_eth = BigUint::from(10u64.pow(18));
        let quarter = BigUint::from(25u64 * 10u64.pow(16));
        assert_eq!(calculate_progress(&quarter, &one_eth), 25.0);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Inverted bounds don't panic.
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_folds() {
        assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(average(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_percentages() {
        assert_eq!(calculate_percentage(25.0, 200.0), 12.5);
        assert_eq!(calculate_percentage(25.0, 0.0), 0.0);
        assert_eq!(apply_percentage(200.0, 12.5), 25.0);
        assert_eq!(apply_percentage(0.0, 50.0), 0.0);
    }
}
