//! # Supported Networks & Explorer Links
//!
//! The vault contract is deployed on Base mainnet and Base Sepolia. Ethereum
//! mainnet and Sepolia are known by name only, so a wallet sitting on one of
//! them gets a readable "wrong network" message instead of a chain id.
//!
//! Explorer links fall back to the mainnet explorer for unknown chains. A
//! link that might be wrong beats no link at all in a toast.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{BASE_MAINNET, BASE_SEPOLIA, ETHEREUM_MAINNET, SEPOLIA};

const BASE_EXPLORER: &str = "https://basescan.org";
const BASE_SEPOLIA_EXPLORER: &str = "https://sepolia.basescan.org";

/// Display name used for any chain id we don't recognise.
pub const UNKNOWN_NETWORK: &str = "Unknown Network";

// ---------------------------------------------------------------------------
// Chain Table
// ---------------------------------------------------------------------------

/// Native currency metadata for a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
}

/// A block explorer front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

/// Static description of a chain the vault contract lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    /// Public RPC endpoints, preferred first.
    pub rpc_urls: &'static [&'static str],
    pub block_explorer: BlockExplorer,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

/// Chains with a deployed vault contract, default chain first.
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        id: BASE_MAINNET,
        name: "Base",
        native_currency: ETHER,
        rpc_urls: &["https://mainnet.base.org"],
        block_explorer: BlockExplorer {
            name: "BaseScan",
            url: BASE_EXPLORER,
        },
    },
    ChainInfo {
        id: BASE_SEPOLIA,
        name: "Base Sepolia",
        native_currency: ETHER,
        rpc_urls: &["https://sepolia.base.org"],
        block_explorer: BlockExplorer {
            name: "BaseScan",
            url: BASE_SEPOLIA_EXPLORER,
        },
    },
];

/// Looks up a supported chain by id.
pub fn chain_info(chain_id: u64) -> Option<&'static ChainInfo> {
    let info = SUPPORTED_CHAINS.iter().find(|c| c.id == chain_id);
    if info.is_none() {
        debug!(chain_id, "no chain info for unsupported chain");
    }
    info
}

pub fn is_mainnet(chain_id: u64) -> bool {
    chain_id == BASE_MAINNET
}

pub fn is_testnet(chain_id: u64) -> bool {
    chain_id == BASE_SEPOLIA
}

/// Whether the vault contract is deployed on `chain_id`.
pub fn is_supported_chain(chain_id: u64) -> bool {
    is_mainnet(chain_id) || is_testnet(chain_id)
}

/// Human-readable network name, for headers and "wrong network" banners.
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        BASE_MAINNET => "Base Mainnet",
        BASE_SEPOLIA => "Base Sepolia",
        ETHEREUM_MAINNET => "Ethereum Mainnet",
        SEPOLIA => "Sepolia",
        _ => UNKNOWN_NETWORK,
    }
}

// ---------------------------------------------------------------------------
// Explorer Links
// ---------------------------------------------------------------------------

/// What an explorer link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExplorerKind {
    Tx,
    Address,
    Token,
}

impl ExplorerKind {
    /// URL path segment used by Etherscan-family explorers.
    pub fn path_segment(self) -> &'static str {
        match self {
            ExplorerKind::Tx => "tx",
            ExplorerKind::Address => "address",
            ExplorerKind::Token => "token",
        }
    }
}

impl fmt::Display for ExplorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Base URL of the explorer for `chain_id`. Unknown chains get the
/// mainnet explorer.
pub fn explorer_url(chain_id: u64) -> &'static str {
    match chain_id {
        BASE_SEPOLIA => BASE_SEPOLIA_EXPLORER,
        _ => BASE_EXPLORER,
    }
}

/// Full explorer link, e.g. `https://basescan.org/tx/0xabc…`.
pub fn explorer_link(chain_id: u64, data: &str, kind: ExplorerKind) -> String {
    format!("{}/{}/{}", explorer_url(chain_id), kind, data)
}

pub fn explorer_address_url(chain_id: u64, address: &str) -> String {
    explorer_link(chain_id, address, ExplorerKind::Address)
}

pub fn explorer_tx_url(chain_id: u64, tx_hash: &str) -> String {
    explorer_link(chain_id, tx_hash, ExplorerKind::Tx)
}
