//! The building directory behind the start/end selectors.
//!
//! The service hands back an unordered short name → long name map. The
//! directory turns it into a list sorted by long name (case-insensitive,
//! stable over the service's key order) with a "no building selected"
//! sentinel in front.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::NetworkError;
use crate::ports::CampusService;

/// Short name of the "no building selected" sentinel.
pub const NULL_BUILDING: &str = "NULL";

/// Label of the "no building selected" sentinel.
pub const NO_BUILDING_LABEL: &str = "NO BUILDING SELECTED";

/// One selectable building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingEntry {
    /// Identifier used in path queries.
    pub short_name: String,
    /// Human-readable label.
    pub long_name: String,
}

impl BuildingEntry {
    /// Creates an entry.
    pub fn new(short_name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self { short_name: short_name.into(), long_name: long_name.into() }
    }

    /// The "no building selected" entry.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::new(NULL_BUILDING, NO_BUILDING_LABEL)
    }

    /// Returns `true` for the "no building selected" entry.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.short_name == NULL_BUILDING
    }
}

/// Sorted selection list, sentinel first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingDirectory {
    entries: Vec<BuildingEntry>,
}

impl BuildingDirectory {
    /// A directory holding only the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: vec![BuildingEntry::sentinel()] }
    }

    /// Builds a directory from entries in service order.
    #[must_use]
    pub fn from_entries(mut buildings: Vec<BuildingEntry>) -> Self {
        // Stable: equal labels keep the service's key order.
        buildings.sort_by_cached_key(|entry| entry.long_name.to_lowercase());

        let mut entries = Vec::with_capacity(buildings.len() + 1);
        entries.push(BuildingEntry::sentinel());
        entries.extend(buildings);
        Self { entries }
    }

    /// Fetches and sorts the directory.
    ///
    /// # Errors
    ///
    /// Returns the service failure unchanged; no retry is attempted.
    pub async fn load(service: &dyn CampusService) -> Result<Self, NetworkError> {
        let buildings = service.valid_buildings().await?;
        info!("loaded {} buildings", buildings.len());
        Ok(Self::from_entries(buildings))
    }

    /// All entries, sentinel first.
    #[must_use]
    pub fn entries(&self) -> &[BuildingEntry] {
        &self.entries
    }

    /// Real buildings, without the sentinel.
    #[must_use]
    pub fn buildings(&self) -> &[BuildingEntry] {
        &self.entries[1..]
    }

    /// Looks up an entry by short name. The sentinel is always present.
    #[must_use]
    pub fn get(&self, short_name: &str) -> Option<&BuildingEntry> {
        self.entries.iter().find(|entry| entry.short_name == short_name)
    }

    /// Returns `true` if `short_name` can be selected.
    #[must_use]
    pub fn contains(&self, short_name: &str) -> bool {
        self.get(short_name).is_some()
    }
}

impl Default for BuildingDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(directory: &BuildingDirectory) -> Vec<&str> {
        directory.entries().iter().map(|e| e.long_name.as_str()).collect()
    }

    #[test]
    fn sorts_by_long_name_with_sentinel_first() {
        let directory = BuildingDirectory::from_entries(vec![
            BuildingEntry::new("ABE", "Architecture Hall"),
            BuildingEntry::new("BAG", "Bagley Hall"),
        ]);
        assert_eq!(labels(&directory), ["NO BUILDING SELECTED", "Architecture Hall", "Bagley Hall"]);
        assert!(directory.entries()[0].is_sentinel());
    }

    #[test]
    fn orders_by_label_not_short_name() {
        let directory = BuildingDirectory::from_entries(vec![
            BuildingEntry::new("AAA", "Zoology"),
            BuildingEntry::new("ZZZ", "Allen Center"),
        ]);
        let shorts: Vec<&str> =
            directory.buildings().iter().map(|e| e.short_name.as_str()).collect();
        assert_eq!(shorts, ["ZZZ", "AAA"]);
    }

    #[test]
    fn comparison_ignores_case() {
        let directory = BuildingDirectory::from_entries(vec![
            BuildingEntry::new("B", "bagley Hall"),
            BuildingEntry::new("A", "Architecture Hall"),
            BuildingEntry::new("C", "Condon Hall"),
        ]);
        assert_eq!(&labels(&directory)[1..], ["Architecture Hall", "bagley Hall", "Condon Hall"]);
    }

    #[test]
    fn equal_labels_keep_service_order() {
        let directory = BuildingDirectory::from_entries(vec![
            BuildingEntry::new("KNE", "Kane Hall"),
            BuildingEntry::new("KNE2", "kane hall"),
            BuildingEntry::new("AND", "Anderson Hall"),
            BuildingEntry::new("KNE3", "Kane Hall"),
        ]);
        let shorts: Vec<&str> =
            directory.buildings().iter().map(|e| e.short_name.as_str()).collect();
        assert_eq!(shorts, ["AND", "KNE", "KNE2", "KNE3"]);
    }

    #[test]
    fn empty_directory_holds_only_sentinel() {
        let directory = BuildingDirectory::new();
        assert_eq!(directory.entries(), [BuildingEntry::sentinel()]);
        assert!(directory.buildings().is_empty());
        assert!(directory.contains(NULL_BUILDING));
        assert!(!directory.contains("CSE"));
    }
}
