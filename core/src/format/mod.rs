//! # Display Formatting
//!
//! Turns raw values into the strings the UI actually renders.
//!
//! ```text
//! address.rs : Address truncation ("0x1234...7890")
//! balance.rs : Base-unit balances with fixed display precision
//! number.rs  : Grouped ("1,234.50"), currency ("$1,234.50") and compact ("1.2K") numbers
//! ```
//!
//! Balances stay in `BigUint` all the way to the string. Plain-number
//! formatting takes `f64` and is meant for derived figures (totals in
//! fiat, counts), never for raw on-chain amounts.

pub mod address;
pub mod balance;
pub mod number;

pub use address::{format_address, short_address};
pub use balance::{format_balance, format_eth, format_ether_balance};
pub use number::{format_compact, format_currency, format_number};
