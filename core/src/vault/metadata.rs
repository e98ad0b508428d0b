//! The vault metadata blob.
//!
//! The contract stores an opaque string per vault; the frontend writes JSON
//! into it. Reads have to survive anything: vaults created by other
//! clients, hand-edited blobs, empty strings. Parsing is therefore split
//! in two:
//!
//! - [`parse_vault_metadata`] returns a `Result` for callers that care.
//! - [`parse_vault_metadata_or_default`] never fails and hands back an
//!   "Unnamed Vault" record instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::category::VaultCategory;

/// Name shown for vaults whose metadata can't be read.
pub const UNNAMED_VAULT: &str = "Unnamed Vault";

/// Metadata parse or encode failure.
#[derive(Debug, Error)]
#[error("invalid vault metadata: {0}")]
pub struct MetadataError(#[from] serde_json::Error);

/// Human-facing details attached to a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultMetadata {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Category id. Kept as a raw string so unknown ids survive a
    /// read-modify-write round trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Default for VaultMetadata {
    fn default() -> Self {
        Self {
            name: UNNAMED_VAULT.to_string(),
            description: String::new(),
            category: None,
        }
    }
}

impl VaultMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: VaultCategory) -> Self {
        self.category = Some(category.id().to_string());
        self
    }

    /// The category, if it's one we know.
    pub fn category(&self) -> Option<VaultCategory> {
        self.category.as_deref().and_then(VaultCategory::from_id)
    }
}

/// Parses a metadata blob. A `name` is required; `description` and
/// `category` are optional. Unknown fields are ignored.
pub fn parse_vault_metadata(text: &str) -> Result<VaultMetadata, MetadataError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a metadata blob, falling back to [`VaultMetadata::default`].
pub fn parse_vault_metadata_or_default(text: &str) -> VaultMetadata {
    parse_vault_metadata(text).unwrap_or_else(|err| {
        debug!(error = %err, "vault metadata unreadable, using default");
        VaultMetadata::default()
    })
}

pub fn stringify_vault_metadata(metadata: &VaultMetadata) -> Result<String, MetadataError> {
    Ok(serde_json::to_string(metadata)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_record() {
        let meta = parse_vault_metadata(
            r#"{"name":"Rainy Day","description":"Just in case","category":"emergency"}"#,
        )
        .unwrap();
        assert_eq!(meta.name, "Rainy Day");
        assert_eq!(meta.description, "Just in case");
        assert_eq!(meta.category(), Some(VaultCategory::Emergency));
    }

    #[test]
    fn test_description_and_category_are_optional() {
        let meta = parse_vault_metadata(r#"{"name":"Test"}"#).unwrap();
        assert_eq!(meta, VaultMetadata::new("Test", ""));
        assert_eq!(meta.category(), None);
    }

    #[test]
    fn test_unknown_category_is_preserved() {
        let meta = parse_vault_metadata(r#"{"name":"Boat","category":"yacht"}"#).unwrap();
        assert_eq!(meta.category.as_deref(), Some("yacht"));
        assert_eq!(meta.category(), None);
        let again = stringify_vault_metadata(&meta).unwrap();
        assert!(again.contains(r#""category":"yacht""#));
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        for blob in ["invalid", "", "{", "[]", r#"{"description":"no name"}"#] {
            assert!(parse_vault_metadata(blob).is_err(), "{blob:?} should not parse");
            assert_eq!(parse_vault_metadata_or_default(blob), VaultMetadata::default());
        }
        assert_eq!(VaultMetadata::default().name, "Unnamed Vault");
    }

    #[test]
    fn test_stringify_then_parse() {
        let meta = VaultMetadata::new("House", "Deposit fund").with_category(VaultCategory::Home);
        let blob = stringify_vault_metadata(&meta).unwrap();
        assert_eq!(
            blob,
            r#"{"name":"House","description":"Deposit fund","category":"home"}"#
        );
        assert_eq!(parse_vault_metadata(&blob).unwrap(), meta);
    }

    #[test]
    fn test_missing_category_is_not_serialized() {
        let blob = stringify_vault_metadata(&VaultMetadata::new("A", "B")).unwrap();
        assert_eq!(blob, r#"{"name":"A","description":"B"}"#);
    }
}
