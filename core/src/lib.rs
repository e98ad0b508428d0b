// Copyright (c) 2026 BlueVault Contributors. MIT License.
// See LICENSE for details.

//! # BlueVault Core Library
//!
//! Everything the BlueVault frontend needs to turn raw chain data into
//! something a human can read, and to keep UI glue honest while it waits
//! on the network.
//!
//! There is no protocol here. Vault logic lives on-chain and wallet
//! plumbing lives in the connection provider. What's left is the layer in
//! between: amounts, addresses, countdowns, input checks, and two small
//! pieces of infrastructure that several screens share.
//!
//! ## Architecture
//!
//! - **math**: Progress, percentages, clamping, folds. Floating point on
//!   purpose: these numbers only ever feed a progress bar.
//! - **units**: Exact base-unit ↔ decimal conversion for token amounts.
//! - **format**: Display strings for balances, addresses, and plain numbers.
//! - **validation**: Total boolean predicates over raw user input.
//! - **time**: Unlock countdowns.
//! - **vault**: The vault record as the frontend sees it, its metadata
//!   blob, categories, status, and fee math.
//! - **chain**: Supported networks and block-explorer links.
//! - **errors**: Classifying wallet/contract failures into user messages.
//! - **pagination**: Slicing long vault lists into pages.
//! - **async_op**: Lifecycle tracker for a single async operation.
//! - **events**: Owned publish/subscribe registry for UI notifications.
//! - **config**: Constants and runtime client settings.
//!
//! ## Ground Rules
//!
//! 1. Amounts are `BigUint` in base units until the very last moment.
//!    Floats appear only where the result is a percentage.
//! 2. Predicates never panic and never error. `false` is the answer.
//! 3. Anything that reads the wall clock has an `_at(now)` twin so tests
//!    don't depend on when they run.

pub mod async_op;
pub mod chain;
pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod math;
pub mod pagination;
pub mod time;
pub mod units;
pub mod validation;
pub mod vault;

pub use num_bigint::BigUint;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
