//! Search, facet filtering and sorting over catalog records.
//!
//! [`filter_and_sort`] is a pure function of the record slice and a
//! [`FilterQuery`]. It never mutates its input and never fails; an empty result
//! is an ordinary value the listing renders as an empty state.
//!
//! # Matching
//!
//! A record passes when all three hold:
//!
//! 1. the search term is empty, or its lowercase form is a substring of the
//!    lowercase name, country or description;
//! 2. the category facet is [`Facet::All`] or equals the record's category;
//! 3. the difficulty facet is [`Facet::All`] or equals the record's difficulty.
//!
//! # Ordering
//!
//! Results are stably sorted by the query's [`SortKey`]. Name and country use
//! Unicode collation (CLDR root order via `feruca`), so "Émile" sorts next to
//! "Emile" rather than after "Z". Difficulty sorts by rank.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::catalog::{filter_and_sort, Catalog, Facet, FilterQuery, SortKey};
//! use world_cuisines::domain::Difficulty;
//!
//! let catalog = Catalog::builtin()?;
//! let query = FilterQuery {
//!     category: Facet::Only("Asian".to_string()),
//!     difficulty: Facet::Only(Difficulty::Medium),
//!     ..FilterQuery::default()
//! };
//!
//! let names: Vec<&str> = filter_and_sort(catalog.records(), &query)
//!     .iter()
//!     .map(|r| r.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Chinese Cuisine", "Indian Cuisine", "Thai Cuisine"]);
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

use crate::domain::{CuisineRecord, Difficulty};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single-select filter dimension with an "All" wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facet<T> {
    /// Excludes nothing.
    #[default]
    All,
    /// Keeps only records whose value equals this one.
    Only(T),
}

impl<T: PartialEq + Clone> Facet<T> {
    /// Whether `value` passes this facet.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Whether the facet is the wildcard.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Steps to the next option: All, then each option in order, then All.
    ///
    /// A selected value that is no longer among `options` falls back to All.
    #[must_use]
    pub fn cycled(&self, options: &[T]) -> Self {
        match self {
            Self::All => options.first().cloned().map_or(Self::All, Self::Only),
            Self::Only(current) => options
                .iter()
                .position(|o| o == current)
                .and_then(|i| options.get(i + 1))
                .cloned()
                .map_or(Self::All, Self::Only),
        }
    }
}

/// Field the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Collated by display name.
    #[default]
    Name,
    /// Collated by country of origin.
    Country,
    /// By difficulty rank, easiest first.
    Difficulty,
}

impl SortKey {
    /// Sort keys in the order the listing cycles through them.
    pub const ALL: [Self; 3] = [Self::Name, Self::Country, Self::Difficulty];

    /// Label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Country => "Country",
            Self::Difficulty => "Difficulty",
        }
    }

    /// The next sort key, wrapping back to `Name`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Country,
            Self::Country => Self::Difficulty,
            Self::Difficulty => Self::Name,
        }
    }
}

/// User-selected listing constraints.
///
/// The default query is "show everything sorted by name".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Case-insensitive substring searched in name, country and description.
    pub search_term: String,
    /// Category facet.
    pub category: Facet<String>,
    /// Difficulty facet.
    pub difficulty: Facet<Difficulty>,
    /// Result ordering.
    pub sort_key: SortKey,
}

impl FilterQuery {
    /// Whether the query differs from the default in any way the user can see.
    ///
    /// True when the search term is non-empty, either facet is narrowed or the
    /// sort key is not `Name`. Drives the "Clear Filters" control.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || !self.category.is_all()
            || !self.difficulty.is_all()
            || self.sort_key != SortKey::Name
    }

    /// Resets every constraint to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn matches(&self, record: &CuisineRecord, needle: &str) -> bool {
        let search_hit = needle.is_empty()
            || record.name.to_lowercase().contains(needle)
            || record.country.to_lowercase().contains(needle)
            || record.description.to_lowercase().contains(needle);

        search_hit
            && self.category.admits(&record.category)
            && self.difficulty.admits(&record.difficulty)
    }
}

/// Filters and orders catalog records according to `query`.
///
/// # Parameters
///
/// * `records` - Catalog records, borrowed for the lifetime of the result
/// * `query` - Search term, facets and sort key
///
/// # Returns
///
/// Matching records in sort order. Records that compare equal keep their
/// catalog order.
#[must_use]
pub fn filter_and_sort<'a>(records: &'a [CuisineRecord], query: &FilterQuery) -> Vec<&'a CuisineRecord> {
    let _span = tracing::trace_span!(
        "filter_and_sort",
        total = records.len(),
        sort_key = ?query.sort_key
    )
    .entered();

    let needle = query.search_term.to_lowercase();
    let mut hits: Vec<&CuisineRecord> = records
        .iter()
        .filter(|record| query.matches(record, &needle))
        .collect();

    match query.sort_key {
        SortKey::Name => {
            let mut collator = Collator::default();
            hits.sort_by(|a, b| collate(&mut collator, &a.name, &b.name));
        }
        SortKey::Country => {
            let mut collator = Collator::default();
            hits.sort_by(|a, b| collate(&mut collator, &a.country, &b.country));
        }
        SortKey::Difficulty => hits.sort_by_key(|r| r.difficulty.rank()),
    }

    tracing::trace!(matched = hits.len(), "catalog filtered");
    hits
}

fn collate(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: &str, name: &str, country: &str, category: &str, difficulty: Difficulty) -> CuisineRecord {
        CuisineRecord {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            description: format!("Food from {country}"),
            category: category.to_string(),
            difficulty,
            cooking_time: "30 minutes".to_string(),
            ingredients: vec![],
            popular_dishes: vec![],
            history: String::new(),
            featured: false,
        }
    }

    fn difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]
    }

    fn records() -> impl Strategy<Value = Vec<CuisineRecord>> {
        prop::collection::vec(
            (
                "[a-mA-Mé ]{1,12}",
                "[a-m]{1,10}",
                prop_oneof![Just("European"), Just("Asian"), Just("African")],
                difficulty(),
            ),
            0..24,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, country, category, difficulty))| {
                    record(&i.to_string(), &name, &country, category, difficulty)
                })
                .collect()
        })
    }

    #[test]
    fn medium_difficulty_sorted_by_name() {
        let records = vec![
            record("6", "Thai Cuisine", "Thailand", "Asian", Difficulty::Medium),
            record("1", "Italian Cuisine", "Italy", "European", Difficulty::Medium),
            record("3", "Indian Cuisine", "India", "Asian", Difficulty::Medium),
        ];
        let query = FilterQuery {
            difficulty: Facet::Only(Difficulty::Medium),
            ..FilterQuery::default()
        };

        let names: Vec<&str> = filter_and_sort(&records, &query)
            .iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(names, vec!["Indian Cuisine", "Italian Cuisine", "Thai Cuisine"]);
    }

    #[test]
    fn italian_sorts_before_thai() {
        let records = vec![
            record("6", "Thai Cuisine", "Thailand", "Asian", Difficulty::Medium),
            record("1", "Italian Cuisine", "Italy", "European", Difficulty::Medium),
        ];

        let query = FilterQuery {
            search_term: "cuisine".to_string(),
            ..FilterQuery::default()
        };
        let sorted = filter_and_sort(&records, &query);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].id, "1");
        assert_eq!(sorted[1].id, "6");
    }

    #[test]
    fn search_is_case_insensitive_over_country_and_description() {
        let records = vec![
            record("1", "Italian Cuisine", "Italy", "European", Difficulty::Medium),
            record("2", "Greek Cuisine", "Greece", "European", Difficulty::Easy),
        ];

        let by_country = FilterQuery {
            search_term: "GREECE".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(filter_and_sort(&records, &by_country).len(), 1);

        let by_description = FilterQuery {
            search_term: "food from ital".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(filter_and_sort(&records, &by_description)[0].id, "1");
    }

    #[test]
    fn accented_names_collate_naturally() {
        let records = vec![
            record("1", "Zanzibari", "Tanzania", "African", Difficulty::Easy),
            record("2", "Émilienne", "France", "European", Difficulty::Easy),
            record("3", "Eritrean", "Eritrea", "African", Difficulty::Easy),
        ];

        let ids: Vec<&str> = filter_and_sort(&records, &FilterQuery::default())
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_by_difficulty_is_stable() {
        let records = vec![
            record("a", "Zulu", "X", "African", Difficulty::Hard),
            record("b", "Alpha", "X", "African", Difficulty::Easy),
            record("c", "Mike", "X", "African", Difficulty::Hard),
            record("d", "Bravo", "X", "African", Difficulty::Easy),
        ];
        let query = FilterQuery {
            sort_key: SortKey::Difficulty,
            ..FilterQuery::default()
        };

        let ids: Vec<&str> = filter_and_sort(&records, &query)
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn active_filters_and_clear() {
        let mut query = FilterQuery::default();
        assert!(!query.has_active_filters());

        query.sort_key = SortKey::Country;
        assert!(query.has_active_filters());

        query.search_term = "rice".to_string();
        query.category = Facet::Only("Asian".to_string());
        query.clear();
        assert_eq!(query, FilterQuery::default());
    }

    #[test]
    fn facet_cycles_through_options_and_back() {
        let options = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        let mut facet = Facet::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            facet = facet.cycled(&options);
            seen.push(facet.clone());
        }

        assert_eq!(
            seen,
            vec![
                Facet::Only(Difficulty::Easy),
                Facet::Only(Difficulty::Medium),
                Facet::Only(Difficulty::Hard),
                Facet::All,
            ]
        );
    }

    proptest! {
        #[test]
        fn default_query_keeps_every_record(records in records()) {
            let result = filter_and_sort(&records, &FilterQuery::default());
            prop_assert_eq!(result.len(), records.len());
        }

        #[test]
        fn unmatched_search_yields_nothing(records in records(), difficulty in difficulty()) {
            let query = FilterQuery {
                search_term: "#no-such-cuisine#".to_string(),
                difficulty: Facet::Only(difficulty),
                ..FilterQuery::default()
            };
            prop_assert!(filter_and_sort(&records, &query).is_empty());
        }

        #[test]
        fn difficulty_sort_is_non_decreasing(records in records()) {
            let query = FilterQuery {
                sort_key: SortKey::Difficulty,
                ..FilterQuery::default()
            };
            let result = filter_and_sort(&records, &query);
            for pair in result.windows(2) {
                prop_assert!(pair[0].difficulty.rank() <= pair[1].difficulty.rank());
            }
        }

        #[test]
        fn name_sort_is_non_decreasing(records in records()) {
            let result = filter_and_sort(&records, &FilterQuery::default());
            let mut collator = Collator::default();
            for pair in result.windows(2) {
                prop_assert_ne!(
                    collate(&mut collator, &pair[0].name, &pair[1].name),
                    Ordering::Greater
                );
            }
        }

        #[test]
        fn filtering_is_idempotent(
            records in records(),
            term in "[a-e]{0,2}",
            category in prop_oneof![Just(Facet::All), Just(Facet::Only("Asian".to_string()))],
            sort_key in prop_oneof![Just(SortKey::Name), Just(SortKey::Country), Just(SortKey::Difficulty)],
        ) {
            let query = FilterQuery {
                search_term: term,
                category,
                difficulty: Facet::All,
                sort_key,
            };

            let once: Vec<CuisineRecord> = filter_and_sort(&records, &query).into_iter().cloned().collect();
            let twice: Vec<CuisineRecord> = filter_and_sort(&once, &query).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }
    }
}
