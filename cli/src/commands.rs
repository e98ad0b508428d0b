//! Subcommand handlers.
//!
//! Each handler renders its output to a `String` so `main` only has to
//! print it. `validate` also reports whether the input was accepted.

use anyhow::{Context, Result};
use chrono::Utc;

use bluevault_core::chain::{self, ExplorerKind};
use bluevault_core::config::{ClientConfig, PROTOCOL_FEE_BPS};
use bluevault_core::format::{format_address, format_balance, format_compact};
use bluevault_core::math::calculate_progress;
use bluevault_core::time::{format_time_remaining, get_time_remaining_at, seconds_to_days};
use bluevault_core::units::{format_ether, format_units, parse_ether};
use bluevault_core::validation::{
    is_valid_address, validate_amount, validate_metadata, validate_unlock_time_at,
};
use bluevault_core::vault::{fee_for_rate, parse_vault_metadata};
use bluevault_core::BigUint;

use crate::cli::{
    AddressArgs, BalanceArgs, ChainArgs, CompactArgs, FeeArgs, ProgressArgs, TimeLeftArgs,
    ValidateTarget,
};

fn parse_base_units(raw: &str, what: &str) -> Result<BigUint> {
    raw.trim()
        .parse::<BigUint>()
        .with_context(|| format!("{what} must be a non-negative integer in base units, got {raw:?}"))
}

fn unix_now() -> i64 {
    Utc::now().timestamp()
}

pub fn balance(args: &BalanceArgs) -> Result<String> {
    let amount = parse_base_units(&args.amount, "amount")?;
    if args.exact {
        Ok(format_units(&amount, args.decimals))
    } else {
        Ok(format_balance(&amount, args.decimals, args.display))
    }
}

pub fn progress(args: &ProgressArgs) -> Result<String> {
    let current = parse_base_units(&args.current, "current")?;
    let goal = parse_base_units(&args.goal, "goal")?;
    Ok(format!("{:.2}%", calculate_progress(&current, &goal)))
}

pub fn time_left(args: &TimeLeftArgs) -> String {
    let now = args.now.unwrap_or_else(|| unix_now().max(0) as u64);
    let remaining = get_time_remaining_at(args.unlock, now);
    tracing::debug!(unlock = args.unlock, now, remaining, "computed time remaining");
    if remaining == 0 {
        return format_time_remaining(0);
    }
    format!(
        "{} ({} seconds, {} whole days)",
        format_time_remaining(remaining),
        remaining,
        seconds_to_days(remaining)
    )
}

pub fn address(args: &AddressArgs) -> String {
    format_address(&args.address, args.prefix, args.suffix)
}

/// Returns the verdict line and whether the input was accepted.
pub fn validate(target: &ValidateTarget) -> (String, bool) {
    let (what, ok, reason) = match target {
        ValidateTarget::Amount { text } => (
            "amount",
            validate_amount(text),
            "must be a positive number",
        ),
        ValidateTarget::UnlockTime { timestamp, now } => (
            "unlock time",
            validate_unlock_time_at(*timestamp, now.unwrap_or_else(unix_now)),
            "must be in the future",
        ),
        ValidateTarget::Metadata { json } => {
            let ok = validate_metadata(json);
            if ok && parse_vault_metadata(json).is_err() {
                tracing::info!("metadata is valid JSON but not a vault metadata record");
            }
            ("metadata", ok, "must be valid JSON")
        }
        ValidateTarget::Address { text } => (
            "address",
            is_valid_address(text),
            "must be 0x followed by 40 hex digits",
        ),
    };
    if ok {
        (format!("valid {what}"), true)
    } else {
        (format!("invalid {what}: {reason}"), false)
    }
}

pub fn fee(args: &FeeArgs) -> Result<String> {
    let amount = parse_ether(&args.amount)
        .with_context(|| format!("could not parse {:?} as an ETH amount", args.amount))?;
    let bps = args.bps.unwrap_or(PROTOCOL_FEE_BPS);
    let fee = fee_for_rate(&amount, bps)?;
    let net = &amount - &fee;
    Ok(format!(
        "amount : {} ETH\nfee    : {} ETH ({} bps)\nnet    : {} ETH",
        format_ether(&amount),
        format_ether(&fee),
        bps,
        format_ether(&net)
    ))
}

pub fn chain(args: &ChainArgs) -> String {
    let config = ClientConfig {
        chain_id: args.chain_id,
        rpc_url: args.rpc_url.clone(),
        walletconnect_project_id: args.walletconnect_project_id.clone(),
    };
    if !config.is_supported() {
        tracing::warn!(chain_id = config.chain_id, "chain has no vault deployment");
    }

    let network = chain::network_name(config.chain_id);
    let kind = if chain::is_mainnet(config.chain_id) {
        "mainnet"
    } else if chain::is_testnet(config.chain_id) {
        "testnet"
    } else {
        "unsupported"
    };
    let rpc = config.rpc_url().unwrap_or_else(|| "-".to_string());
    let wc = config.walletconnect_project_id.as_deref().unwrap_or("-");

    format!(
        "network        : {network} ({kind})\nchain id       : {}\nrpc url        : {rpc}\nexplorer       : {}\naddress links  : {}\nwalletconnect  : {wc}",
        config.chain_id,
        chain::explorer_url(config.chain_id),
        chain::explorer_link(config.chain_id, "<address>", ExplorerKind::Address),
    )
}

pub fn compact(args: &CompactArgs) -> String {
    format_compact(args.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_rounds_and_exact_trims() {
        let mut args = BalanceArgs {
            amount: "1500000000000000000".into(),
            decimals: 18,
            display: 4,
            exact: false,
        };
        assert_eq!(balance(&args).unwrap(), "1.5000");
        args.exact = true;
        assert_eq!(balance(&args).unwrap(), "1.5");
    }

    #[test]
    fn test_balance_rejects_decimal_input() {
        let args = BalanceArgs {
            amount: "1.5".into(),
            decimals: 18,
            display: 4,
            exact: false,
        };
        let err = balance(&args).unwrap_err();
        assert!(err.to_string().contains("base units"));
    }

    #[test]
    fn test_progress_is_percentage() {
        let args = ProgressArgs {
            current: "250".into(),
            goal: "1000".into(),
        };
        assert_eq!(progress(&args).unwrap(), "25.00%");
    }

    #[test]
    fn test_time_left_with_fixed_now() {
        let args = TimeLeftArgs {
            unlock: 1_000 + 90_000,
            now: Some(1_000),
        };
        assert_eq!(time_left(&args), "1d 1h (90000 seconds, 1 whole days)");

        let past = TimeLeftArgs {
            unlock: 10,
            now: Some(20),
        };
        assert_eq!(time_left(&past), "Unlocked");
    }

    #[test]
    fn test_validate_reports_verdicts() {
        let (line, ok) = validate(&ValidateTarget::Amount { text: "0".into() });
        assert!(!ok);
        assert_eq!(line, "invalid amount: must be a positive number");

        let (_, ok) = validate(&ValidateTarget::UnlockTime {
            timestamp: 200,
            now: Some(100),
        });
        assert!(ok);

        let (_, ok) = validate(&ValidateTarget::Address {
            text: "0x1234567890abcdef1234567890abcdef12345678".into(),
        });
        assert!(ok);
    }

    #[test]
    fn test_fee_breakdown() {
        let args = FeeArgs {
            amount: "1".into(),
            bps: None,
        };
        assert_eq!(
            fee(&args).unwrap(),
            "amount : 1 ETH\nfee    : 0.005 ETH (50 bps)\nnet    : 0.995 ETH"
        );

        let too_high = FeeArgs {
            amount: "1".into(),
            bps: Some(500),
        };
        assert!(fee(&too_high).is_err());
    }

    #[test]
    fn test_chain_summary_falls_back_to_default_rpc() {
        let args = ChainArgs {
            chain_id: 84532,
            rpc_url: None,
            walletconnect_project_id: None,
        };
        let out = chain(&args);
        assert!(out.contains("Base Sepolia (testnet)"));
        assert!(out.contains("https://sepolia.base.org"));
        assert!(out.contains("https://sepolia.basescan.org/address/<address>"));
    }
}
