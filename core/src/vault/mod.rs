//! # Vault Module
//!
//! Vaults live on-chain. This module holds the shape the frontend reads
//! them into and the derived values the cards display.
//!
//! ## Architecture
//!
//! ```text
//! record.rs   : VaultData as read from the contract, derived status
//! metadata.rs : The JSON metadata blob: parse, fall back, stringify
//! category.rs : Known savings categories with labels and icons
//! fee.rs      : Basis-point fee math
//! ```
//!
//! All amounts are `BigUint` in base units. Nothing here writes to the
//! chain.

pub mod category;
pub mod fee;
pub mod metadata;
pub mod record;

pub use category::VaultCategory;
pub use fee::{amount_after_fee, calculate_fee, fee_for_rate, FeeError};
pub use metadata::{
    parse_vault_metadata, parse_vault_metadata_or_default, stringify_vault_metadata,
    MetadataError, VaultMetadata,
};
pub use record::{VaultData, VaultStatus};
