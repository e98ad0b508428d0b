//! # CLI Interface
//!
//! Argument structure for `bluevault` using `clap` derive. Every
//! subcommand is offline: it formats or checks values given on the
//! command line and never talks to a node.

use clap::{Args, Parser, Subcommand};

use bluevault_core::config::{
    DEFAULT_ADDRESS_PREFIX, DEFAULT_ADDRESS_SUFFIX, DEFAULT_CHAIN_ID, DEFAULT_DECIMALS,
    DEFAULT_DISPLAY_DECIMALS, ENV_CHAIN_ID, ENV_RPC_URL, ENV_WALLETCONNECT_PROJECT_ID,
    MAX_DECIMALS,
};

/// BlueVault savings vault inspector.
///
/// Renders balances, progress and countdowns the way the BlueVault
/// frontend does, and checks user input against the same rules.
#[derive(Parser, Debug)]
#[command(
    name = "bluevault",
    about = "BlueVault savings vault inspector",
    version,
    propagate_version = true
)]
pub struct BlueVaultCli {
    /// Log output format: pretty or json.
    #[arg(long, global = true, env = "BLUEVAULT_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Default log directive when RUST_LOG is unset.
    #[arg(long, global = true, env = "BLUEVAULT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a base-unit amount as a decimal balance.
    Balance(BalanceArgs),
    /// Percentage of a savings goal reached.
    Progress(ProgressArgs),
    /// Time left until a vault unlocks.
    TimeLeft(TimeLeftArgs),
    /// Shorten an address for display.
    Address(AddressArgs),
    /// Check user input. Exits non-zero when the input is rejected.
    #[command(subcommand)]
    Validate(ValidateTarget),
    /// Protocol fee and net deposit for an ETH amount.
    Fee(FeeArgs),
    /// Show the resolved network configuration.
    Chain(ChainArgs),
    /// Compact notation for a number (1.2K, 3M, ...).
    Compact(CompactArgs),
    /// Print version information and exit.
    Version,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Amount in base units (wei for ETH).
    pub amount: String,

    /// Token decimals.
    #[arg(
        long,
        default_value_t = DEFAULT_DECIMALS,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DECIMALS as i64)
    )]
    pub decimals: u32,

    /// Fractional digits to show.
    #[arg(
        long,
        default_value_t = DEFAULT_DISPLAY_DECIMALS,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DECIMALS as i64)
    )]
    pub display: u32,

    /// Print the exact value with trailing zeros trimmed instead.
    #[arg(long)]
    pub exact: bool,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Current balance in base units.
    pub current: String,
    /// Goal in base units.
    pub goal: String,
}

#[derive(Args, Debug)]
pub struct TimeLeftArgs {
    /// Unlock time, Unix seconds.
    pub unlock: u64,

    /// Reference time, Unix seconds. Defaults to the current time.
    #[arg(long)]
    pub now: Option<u64>,
}

#[derive(Args, Debug)]
pub struct AddressArgs {
    pub address: String,

    #[arg(long, default_value_t = DEFAULT_ADDRESS_PREFIX)]
    pub prefix: usize,

    #[arg(long, default_value_t = DEFAULT_ADDRESS_SUFFIX)]
    pub suffix: usize,
}

#[derive(Subcommand, Debug)]
pub enum ValidateTarget {
    /// A deposit amount, as typed.
    Amount { text: String },
    /// An unlock time in Unix seconds.
    UnlockTime {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
        /// Reference time, Unix seconds. Defaults to the current time.
        #[arg(long)]
        now: Option<i64>,
    },
    /// A metadata JSON document.
    Metadata { json: String },
    /// A 0x-prefixed 20-byte hex address.
    Address { text: String },
}

#[derive(Args, Debug)]
pub struct FeeArgs {
    /// Deposit amount in ETH, e.g. 1.5
    pub amount: String,

    /// Fee rate in basis points. Defaults to the protocol rate.
    #[arg(long)]
    pub bps: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Target chain id.
    #[arg(long, env = ENV_CHAIN_ID, default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,

    /// RPC endpoint override.
    #[arg(long, env = ENV_RPC_URL)]
    pub rpc_url: Option<String>,

    /// Wallet-connect project id.
    #[arg(long, env = ENV_WALLETCONNECT_PROJECT_ID)]
    pub walletconnect_project_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompactArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}
