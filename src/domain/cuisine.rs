//! Cuisine catalog record and its closed vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the listing filter before any catalog-specific ones.
///
/// The filter bar always shows these, in this order. Categories that appear in
/// the catalog but not here are appended after them.
pub const KNOWN_CATEGORIES: [&str; 4] = ["European", "Asian", "Latin American", "African"];

/// How demanding a cuisine is to cook.
///
/// Variants are declared in rank order, so the derived `Ord` sorts
/// Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Weeknight friendly.
    Easy,
    /// Some technique required.
    Medium,
    /// Demanding technique or long preparation.
    Hard,
}

impl Difficulty {
    /// All difficulties in rank order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Numeric rank used for sorting: Easy = 1, Medium = 2, Hard = 3.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the curated cuisine catalog.
///
/// Records are loaded once from the embedded table and never mutated. `id` is
/// unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineRecord {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Display name, e.g. "Thai Cuisine".
    pub name: String,
    /// Country of origin.
    pub country: String,
    /// One-sentence summary shown on cards.
    pub description: String,
    /// Category label, one of [`KNOWN_CATEGORIES`] for the built-in catalog.
    pub category: String,
    /// Cooking difficulty.
    pub difficulty: Difficulty,
    /// Free-text cooking time, e.g. "30-60 minutes".
    pub cooking_time: String,
    /// Key ingredients in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Signature dishes in display order.
    #[serde(default)]
    pub popular_dishes: Vec<String>,
    /// Short history paragraph for the detail page.
    #[serde(default)]
    pub history: String,
    /// Whether the record is shown on the home page.
    #[serde(default)]
    pub featured: bool,
}
