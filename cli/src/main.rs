// Copyright (c) 2026 BlueVault Contributors. MIT License.
// See LICENSE for details.

//! # BlueVault CLI
//!
//! Entry point for the `bluevault` binary. Parses arguments, initializes
//! logging, and runs one offline subcommand:
//!
//! - `balance`   : base units to a fixed-precision decimal
//! - `progress`  : percentage of a savings goal
//! - `time-left` : countdown to a vault's unlock time
//! - `address`   : shortened address for display
//! - `validate`  : check an amount, unlock time, metadata blob or address
//! - `fee`       : protocol fee and net deposit
//! - `chain`     : resolved network configuration
//! - `compact`   : compact number notation
//! - `version`   : build version information

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{BlueVaultCli, Commands};
use logging::LogFormat;

fn main() -> Result<ExitCode> {
    let cli = BlueVaultCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    let output = match &cli.command {
        Commands::Balance(args) => commands::balance(args)?,
        Commands::Progress(args) => commands::progress(args)?,
        Commands::TimeLeft(args) => commands::time_left(args),
        Commands::Address(args) => commands::address(args),
        Commands::Validate(target) => {
            let (line, accepted) = commands::validate(target);
            println!("{line}");
            return Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Fee(args) => commands::fee(args)?,
        Commands::Chain(args) => commands::chain(args),
        Commands::Compact(args) => commands::compact(args),
        Commands::Version => version_info(),
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn version_info() -> String {
    format!(
        "bluevault      {}\nbluevault-core {}\nrustc          {}",
        env!("CARGO_PKG_VERSION"),
        bluevault_core::VERSION,
        option_env!("RUSTC_VERSION").unwrap_or("unknown")
    )
}
