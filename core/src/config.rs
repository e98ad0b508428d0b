//! # Frontend Configuration & Constants
//!
//! Every magic number the frontend relies on lives here: display defaults,
//! time units, fee parameters, chain ids, storage keys. The runtime half of
//! the story is [`ClientConfig`], which carries the handful of settings that
//! differ per deployment (RPC endpoint, wallet-connect project id).
//!
//! Runtime values are treated as opaque strings. We pass them through to
//! the wallet provider; we don't pretend to understand them.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain;

// ---------------------------------------------------------------------------
// Display Defaults
// ---------------------------------------------------------------------------

/// Decimals exponent assumed when none is given. Every EVM native currency
/// we support uses 18.
pub const DEFAULT_DECIMALS: u32 = 18;

/// Largest decimals exponent accepted from user input. `10^77` is the
/// biggest power of ten a uint256 holds.
pub const MAX_DECIMALS: u32 = 77;

/// Fractional digits shown for balances unless a caller asks otherwise.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 4;

/// Characters kept from the start of a truncated address (`0x` included).
pub const DEFAULT_ADDRESS_PREFIX: usize = 6;

/// Characters kept from the end of a truncated address.
pub const DEFAULT_ADDRESS_SUFFIX: usize = 4;

/// Fractional digits used by [`crate::format::format_number`] by default.
pub const DEFAULT_NUMBER_DECIMALS: usize = 2;

// ---------------------------------------------------------------------------
// Time Units (seconds)
// ---------------------------------------------------------------------------

pub const SECOND: u64 = 1;
pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 3_600;
pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 604_800;

/// Thirty days. Calendar months are a UI problem, not ours.
pub const MONTH: u64 = 2_592_000;

/// 365 days, no leap years.
pub const YEAR: u64 = 31_536_000;

// ---------------------------------------------------------------------------
// Fee Parameters
// ---------------------------------------------------------------------------

/// Protocol fee charged on deposits, in basis points. 50 bps = 0.5%.
pub const PROTOCOL_FEE_BPS: u32 = 50;

/// Ceiling the contract enforces on any fee rate. 200 bps = 2%.
pub const MAX_FEE_BPS: u32 = 200;

/// One hundred percent, expressed in basis points.
pub const BASIS_POINTS: u32 = 10_000;

// ---------------------------------------------------------------------------
// Chain Ids
// ---------------------------------------------------------------------------

pub const BASE_MAINNET: u64 = 8_453;
pub const BASE_SEPOLIA: u64 = 84_532;
pub const ETHEREUM_MAINNET: u64 = 1;
pub const SEPOLIA: u64 = 11_155_111;

/// Chain used when nothing else is configured.
pub const DEFAULT_CHAIN_ID: u64 = BASE_MAINNET;

// ---------------------------------------------------------------------------
// Storage Keys
// ---------------------------------------------------------------------------

/// Keys under which the frontend persists client-side state. Prefixed so
/// they don't collide with other apps served from the same origin.
pub mod storage_keys {
    pub const RECENT_VAULTS: &str = "bluevault_recent_vaults";
    pub const USER_PREFERENCES: &str = "bluevault_preferences";
    pub const THEME: &str = "bluevault_theme";
    pub const LANGUAGE: &str = "bluevault_language";
    pub const CACHE: &str = "bluevault_cache";
    pub const LAST_CHAIN: &str = "bluevault_last_chain";
}

// ---------------------------------------------------------------------------
// Environment Variables
// ---------------------------------------------------------------------------

pub const ENV_CHAIN_ID: &str = "BLUEVAULT_CHAIN_ID";
pub const ENV_RPC_URL: &str = "BLUEVAULT_RPC_URL";
pub const ENV_WALLETCONNECT_PROJECT_ID: &str = "BLUEVAULT_WALLETCONNECT_PROJECT_ID";

// ---------------------------------------------------------------------------
// Client Configuration
// ---------------------------------------------------------------------------

/// Errors raised while loading [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The chain id variable was set but isn't a base-10 integer.
    #[error("invalid chain id in {var}: {value:?}")]
    InvalidChainId {
        /// Environment variable that held the bad value.
        var: &'static str,
        /// The raw value as found.
        value: String,
    },
}

/// Per-deployment settings handed to the wallet-connection layer.
///
/// Only the chain id is interpreted. The RPC URL and the wallet-connect
/// project id are forwarded verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Chain the frontend targets.
    pub chain_id: u64,

    /// RPC endpoint override. `None` means use the chain's public RPC.
    pub rpc_url: Option<String>,

    /// Wallet-connect project id, if wallet-connect is enabled.
    pub walletconnect_project_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            rpc_url: None,
            walletconnect_project_id: None,
        }
    }
}

impl ClientConfig {
    /// Loads settings from the process environment, falling back to
    /// defaults for anything unset. Empty strings count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let chain_id = match non_empty(ENV_CHAIN_ID) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidChainId {
                    var: ENV_CHAIN_ID,
                    value: raw.clone(),
                })?,
            None => DEFAULT_CHAIN_ID,
        };

        Ok(Self {
            chain_id,
            rpc_url: non_empty(ENV_RPC_URL),
            walletconnect_project_id: non_empty(ENV_WALLETCONNECT_PROJECT_ID),
        })
    }

    /// The RPC endpoint to use: the override if present, otherwise the
    /// chain's default public endpoint. `None` for chains we don't know.
    pub fn rpc_url(&self) -> Option<String> {
        self.rpc_url.clone().or_else(|| {
            chain::chain_info(self.chain_id)
                .and_then(|info| info.rpc_urls.first().map(|url| url.to_string()))
        })
    }

    /// Whether the configured chain is one the vault contract is deployed on.
    pub fn is_supported(&self) -> bool {
        chain::is_supported_chain(self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_time_units_are_consistent() {
        assert_eq!(MINUTE, 60 * SECOND);
        assert_eq!(HOUR, 60 * MINUTE);
        assert_eq!(DAY, 24 * HOUR);
        assert_eq!(WEEK, 7 * DAY);
        assert_eq!(MONTH, 30 * DAY);
        assert_eq!(YEAR, 365 * DAY);
    }

    #[test]
    fn test_fee_constants_sanity() {
        // The default rate must itself be a legal rate.
        assert!(PROTOCOL_FEE_BPS <= MAX_FEE_BPS);
        assert!(MAX_FEE_BPS < BASIS_POINTS);
    }

    #[test]
    fn test_chain_ids_are_distinct() {
        let ids = [BASE_MAINNET, BASE_SEPOLIA, ETHEREUM_MAINNET, SEPOLIA];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.chain_id, BASE_MAINNET);
        assert!(config.is_supported());
    }

    #[test]
    fn test_env_values_are_passed_through() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_CHAIN_ID, "84532"),
            (ENV_RPC_URL, "https://rpc.example/anything?goes"),
            (ENV_WALLETCONNECT_PROJECT_ID, "not-checked"),
        ]))
        .unwrap();

        assert_eq!(config.chain_id, BASE_SEPOLIA);
        assert_eq!(
            config.rpc_url().as_deref(),
            Some("https://rpc.example/anything?goes")
        );
        assert_eq!(config.walletconnect_project_id.as_deref(), Some("not-checked"));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config =
            ClientConfig::from_lookup(lookup(&[(ENV_RPC_URL, "  "), (ENV_CHAIN_ID, "")])).unwrap();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.rpc_url.as_deref(), None);
        assert_eq!(config.rpc_url().as_deref(), Some("https://mainnet.base.org"));
    }

    #[test]
    fn test_bad_chain_id_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_CHAIN_ID, "base")])).unwrap_err();
        assert!(err.to_string().contains("BLUEVAULT_CHAIN_ID"));
    }

    #[test]
    fn test_unknown_chain_has_no_default_rpc() {
        let config = ClientConfig {
            chain_id: 424242,
            ..ClientConfig::default()
        };
        assert_eq!(config.rpc_url(), None);
        assert!(!config.is_supported());
    }
}
