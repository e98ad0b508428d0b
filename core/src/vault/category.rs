//! Savings categories a vault can be tagged with.
//!
//! The category travels inside the metadata blob as its string id. Ids we
//! don't recognise are kept as-is in [`super::VaultMetadata`] and simply
//! don't resolve to a [`VaultCategory`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A known savings category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultCategory {
    Emergency,
    Savings,
    Vacation,
    Education,
    Investment,
    Home,
    Retirement,
    Other,
}

impl VaultCategory {
    /// Every category, in picker order.
    pub const ALL: [VaultCategory; 8] = [
        VaultCategory::Emergency,
        VaultCategory::Savings,
        VaultCategory::Vacation,
        VaultCategory::Education,
        VaultCategory::Investment,
        VaultCategory::Home,
        VaultCategory::Retirement,
        VaultCategory::Other,
    ];

    /// Stable id stored in metadata.
    pub fn id(self) -> &'static str {
        match self {
            VaultCategory::Emergency => "emergency",
            VaultCategory::Savings => "savings",
            VaultCategory::Vacation => "vacation",
            VaultCategory::Education => "education",
            VaultCategory::Investment => "investment",
            VaultCategory::Home => "home",
            VaultCategory::Retirement => "retirement",
            VaultCategory::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VaultCategory::Emergency => "Emergency Fund",
            VaultCategory::Savings => "General Savings",
            VaultCategory::Vacation => "Vacation",
            VaultCategory::Education => "Education",
            VaultCategory::Investment => "Investment",
            VaultCategory::Home => "Home Purchase",
            VaultCategory::Retirement => "Retirement",
            VaultCategory::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VaultCategory::Emergency => "🚨",
            VaultCategory::Savings => "💰",
            VaultCategory::Vacation => "✈️",
            VaultCategory::Education => "🎓",
            VaultCategory::Investment => "📈",
            VaultCategory::Home => "🏠",
            VaultCategory::Retirement => "👴",
            VaultCategory::Other => "📦",
        }
    }

    /// Looks a category up by its id. Exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for VaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VaultCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown vault category: {}", s))
    }
}
