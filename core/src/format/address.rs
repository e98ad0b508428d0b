//! Address truncation for headers, tables and toasts.
//!
//! No validation happens here: whatever string comes in is shortened as
//! given, case preserved. Use [`crate::validation::is_valid_address`] if
//! the caller needs to know the address is well-formed.

use crate::config::{DEFAULT_ADDRESS_PREFIX, DEFAULT_ADDRESS_SUFFIX};

/// Shortens `address` to `prefix...suffix`.
///
/// - Empty input returns an empty string.
/// - Input shorter than `prefix_len + suffix_len` is returned unchanged.
///
/// Lengths count characters, not bytes, so odd input can't split a
/// multi-byte character.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    if address.is_empty() {
        return String::new();
    }
    let len = address.chars().count();
    if len < prefix_len + suffix_len {
        return address.to_string();
    }
    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(len - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

/// [`format_address`] with the default 6 + 4 split.
pub fn short_address(address: &str) -> String {
    format_address(address, DEFAULT_ADDRESS_PREFIX, DEFAULT_ADDRESS_SUFFIX)
}
