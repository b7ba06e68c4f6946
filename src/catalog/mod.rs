//! Static cuisine catalog.
//!
//! The catalog ships inside the plugin binary as `data/cuisines.toml` and is
//! parsed once at startup. After loading, records are immutable; every other
//! component borrows them.
//!
//! - [`filter`]: Search, facet filtering and sorting over catalog records
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::catalog::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! assert_eq!(catalog.records().len(), 8);
//! assert!(catalog.get("6").is_some());
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

pub mod filter;

pub use filter::{filter_and_sort, Facet, FilterQuery, SortKey};

use crate::domain::{CuisineError, CuisineRecord, Result, KNOWN_CATEGORIES};
use serde::Deserialize;
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../../data/cuisines.toml");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cuisine: Vec<CuisineRecord>,
}

/// Immutable, ordered collection of cuisine records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CuisineRecord>,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CuisineError::Catalog`] if the embedded table fails to parse
    /// or breaks a catalog invariant.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parses a catalog from TOML text with `[[cuisine]]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`CuisineError::Catalog`] when the text is not valid TOML, when
    /// an id is blank or repeated, or when a category is blank.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| CuisineError::Catalog(e.to_string()))?;
        Self::from_records(file.cuisine)
    }

    /// Builds a catalog from records, checking id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CuisineError::Catalog`] for a blank id, a duplicate id or a
    /// blank category.
    pub fn from_records(records: Vec<CuisineRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(CuisineError::Catalog(format!(
                    "cuisine '{}' has a blank id",
                    record.name
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CuisineError::Catalog(format!(
                    "duplicate cuisine id '{}'",
                    record.id
                )));
            }
            if record.category.trim().is_empty() {
                return Err(CuisineError::Catalog(format!(
                    "cuisine '{}' has a blank category",
                    record.id
                )));
            }
        }

        tracing::debug!(record_count = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// All records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[CuisineRecord] {
        &self.records
    }

    /// Looks a record up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CuisineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records flagged for the home page, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &CuisineRecord> {
        self.records.iter().filter(|r| r.featured)
    }

    /// Category options for the listing filter.
    ///
    /// The known categories come first in their fixed order, followed by any
    /// other category found in the catalog in first-seen order. A category
    /// is never dropped just because it is not in the known set.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut options: Vec<String> = KNOWN_CATEGORIES.iter().map(|c| (*c).to_string()).collect();
        for record in &self.records {
            if !options.iter().any(|c| c == &record.category) {
                options.push(record.category.clone());
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.records().len(), 8);

        let featured: Vec<&str> = catalog.featured().map(|r| r.name.as_str()).collect();
        assert_eq!(
            featured,
            vec!["Italian Cuisine", "Japanese Cuisine", "French Cuisine", "Chinese Cuisine"]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"
            [[cuisine]]
            id = "1"
            name = "A"
            country = "X"
            description = ""
            category = "Asian"
            difficulty = "Easy"
            cooking_time = ""

            [[cuisine]]
            id = "1"
            name = "B"
            country = "Y"
            description = ""
            category = "Asian"
            difficulty = "Hard"
            cooking_time = ""
        "#;

        let err = Catalog::from_toml(text).unwrap_err();
        assert!(matches!(err, CuisineError::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let text = r#"
            [[cuisine]]
            id = "1"
            name = "A"
            country = "X"
            description = ""
            category = "Asian"
            difficulty = "Impossible"
            cooking_time = ""
        "#;

        assert!(matches!(Catalog::from_toml(text), Err(CuisineError::Catalog(_))));
    }

    #[test]
    fn extra_categories_follow_known_ones() {
        let text = r#"
            [[cuisine]]
            id = "1"
            name = "Lebanese"
            country = "Lebanon"
            description = ""
            category = "Middle Eastern"
            difficulty = "Medium"
            cooking_time = ""

            [[cuisine]]
            id = "2"
            name = "Greek"
            country = "Greece"
            description = ""
            category = "European"
            difficulty = "Easy"
            cooking_time = ""
        "#;

        let catalog = Catalog::from_toml(text).unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["European", "Asian", "Latin American", "African", "Middle Eastern"]
        );
    }
}
