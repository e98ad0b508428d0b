//! The vault record as read from the contract.
//!
//! [`VaultData`] mirrors the on-chain struct field for field. The methods
//! on it are the derived values the dashboard renders next to each vault:
//! progress toward the goal, time left on the lock, and a coarse status
//! badge.

use std::fmt;

use chrono::Utc;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::metadata::{parse_vault_metadata_or_default, VaultMetadata};
use crate::math::calculate_progress;
use crate::time::get_time_remaining_at;

/// Status badge shown on a vault card.
///
/// Precedence, highest first: a vault that reached its goal is
/// `Completed`; otherwise one whose lock has expired is `Unlocked`; a
/// still-locked vault holding funds is `Locked`; an empty, still-locked
/// vault is `Active` (created, waiting for its first deposit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultStatus {
    Active,
    Locked,
    Unlocked,
    Completed,
}

impl fmt::Display for VaultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VaultStatus::Active => "active",
            VaultStatus::Locked => "locked",
            VaultStatus::Unlocked => "unlocked",
            VaultStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A savings vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultData {
    pub id: u64,

    /// Owner address, as returned by the contract.
    pub owner: String,

    /// Current balance in base units.
    #[serde(with = "crate::units::decimal_string")]
    pub balance: BigUint,

    /// Seconds since epoch after which the balance can be withdrawn.
    pub unlock_time: u64,

    /// Savings target in base units. Zero means "no goal".
    #[serde(with = "crate::units::decimal_string")]
    pub goal: BigUint,

    /// Raw metadata blob. See [`VaultData::metadata`].
    pub metadata: String,

    /// Seconds since epoch.
    pub created_at: u64,
}

impl VaultData {
    /// Percent of the goal reached, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        calculate_progress(&self.balance, &self.goal)
    }

    /// Whether the balance has reached a non-zero goal.
    pub fn goal_reached(&self) -> bool {
        !self.goal.is_zero() && self.balance >= self.goal
    }

    /// Decoded metadata, or the "Unnamed Vault" default.
    pub fn metadata(&self) -> VaultMetadata {
        parse_vault_metadata_or_default(&self.metadata)
    }

    pub fn time_remaining_at(&self, now: u64) -> u64 {
        get_time_remaining_at(self.unlock_time, now)
    }

    pub fn is_unlocked_at(&self, now: u64) -> bool {
        now >= self.unlock_time
    }

    pub fn status_at(&self, now: u64) -> VaultStatus {
        if self.goal_reached() {
            VaultStatus::Completed
        } else if self.is_unlocked_at(now) {
            VaultStatus::Unlocked
        } else if !self.balance.is_zero() {
            VaultStatus::Locked
        } else {
            VaultStatus::Active
        }
    }

    /// [`status_at`](Self::status_at) using the wall clock.
    pub fn status(&self) -> VaultStatus {
        self.status_at(Utc::now().timestamp().max(0) as u64)
    }
}
