//! # Unlock Countdown
//!
//! A vault's funds are withdrawable once its unlock timestamp passes. These
//! helpers compute how long is left and render it the way the vault cards
//! show it: the two largest units, floored, never rounded up.
//!
//! ```text
//! 0          -> "Unlocked"
//! 90_000     -> "1d 1h"
//! 5_400      -> "1h 30m"
//! 59         -> "0m"
//! ```

use chrono::Utc;

use crate::config::{DAY, HOUR, MINUTE};

/// Seconds until `unlock_timestamp`, measured from the current wall clock.
/// Zero once the unlock time has passed.
pub fn get_time_remaining(unlock_timestamp: u64) -> u64 {
    let now = Utc::now().timestamp().max(0) as u64;
    get_time_remaining_at(unlock_timestamp, now)
}

/// [`get_time_remaining`] against an explicit `now`.
pub fn get_time_remaining_at(unlock_timestamp: u64, now: u64) -> u64 {
    unlock_timestamp.saturating_sub(now)
}

/// Renders a remaining duration for display.
pub fn format_time_remaining(seconds: u64) -> String {
    if seconds == 0 {
        return "Unlocked".to_string();
    }

    let days = seconds / DAY;
    let hours = (seconds % DAY) / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Whole days in `seconds`, floored.
pub fn seconds_to_days(seconds: u64) -> u64 {
    seconds / DAY
}

pub fn days_to_seconds(days: u64) -> u64 {
    days.saturating_mul(DAY)
}
