//! CatalogPolicy - How the catalog treats repeated property IDs

use serde::{Deserialize, Serialize};

/// Duplicate-ID policy applied when adding to the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPolicy {
    /// Append without checking for an existing entry with the same ID
    #[default]
    Permissive,
    /// Reject an add whose ID is already in the catalog
    UniqueIds,
}

impl CatalogPolicy {
    pub fn from_unique_ids(unique: bool) -> Self {
        if unique {
            CatalogPolicy::UniqueIds
        } else {
            CatalogPolicy::Permissive
        }
    }
}
