//! Community review feed.
//!
//! The reviews page lists persisted contact messages, or alternatively the
//! cuisine suggestions, and narrows them with the same search-plus-facet
//! pattern the catalog uses. [`FeedEntry`] is the seam that lets one
//! [`ReviewFeed`] implementation serve both record types.
//!
//! - [`feed`]: Load state, stale-reply protection, filtering and stats

pub mod feed;

pub use feed::{FeedStats, LoadState, ReviewFeed};

use crate::domain::{ContactMessage, ContactStatus, CuisineSuggestion, SuggestionStatus};
use std::fmt::{Debug, Display};

/// A record that can be listed in a [`ReviewFeed`].
pub trait FeedEntry {
    /// Status lifecycle of the record.
    type Status: Copy + PartialEq + Debug + Display + 'static;

    /// Every status value, in lifecycle order.
    const STATUSES: &'static [Self::Status];

    /// Backend id.
    fn id(&self) -> &str;

    /// Whether any searchable field contains `needle` (already lowercase).
    fn matches_term(&self, needle: &str) -> bool;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Email identifying the contributor, used for the distinct count.
    fn contributor(&self) -> &str;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl FeedEntry for ContactMessage {
    type Status = ContactStatus;

    const STATUSES: &'static [ContactStatus] = &ContactStatus::ALL;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_term(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.subject, needle)
            || contains_ci(&self.message, needle)
    }

    fn status(&self) -> ContactStatus {
        self.status
    }

    fn contributor(&self) -> &str {
        &self.email
    }
}

impl FeedEntry for CuisineSuggestion {
    type Status = SuggestionStatus;

    const STATUSES: &'static [SuggestionStatus] = &SuggestionStatus::ALL;

    fn id(&self) -> &str {
        &self.id
    }

    fn matches_term(&self, needle: &str) -> bool {
        contains_ci(&self.cuisine_name, needle)
            || contains_ci(&self.country, needle)
            || contains_ci(&self.description, needle)
            || contains_ci(&self.suggested_by, needle)
    }

    fn status(&self) -> SuggestionStatus {
        self.status
    }

    fn contributor(&self) -> &str {
        &self.email
    }
}
