//! Loading, filtering and summarizing a list of feed entries.
//!
//! # Stale Replies
//!
//! Each load is tagged with a generation number. Leaving the reviews page
//! calls [`ReviewFeed::invalidate`], which bumps the generation; a reply that
//! arrives afterwards carries the old number and [`ReviewFeed::accept`]
//! drops it without touching state.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::domain::ContactMessage;
//! use world_cuisines::reviews::{LoadState, ReviewFeed};
//!
//! let mut feed: ReviewFeed<ContactMessage> = ReviewFeed::new();
//! let generation = feed.begin_load();
//! feed.invalidate();
//!
//! assert!(!feed.accept(generation, Ok(vec![])));
//! assert_eq!(feed.load_state(), &LoadState::Idle);
//! ```

use super::FeedEntry;
use crate::catalog::Facet;
use crate::domain::SubmissionError;
use std::collections::HashSet;

/// Where the feed is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet, or the last request was abandoned.
    Idle,
    /// A request is in flight.
    Loading,
    /// Entries are present (possibly zero of them).
    Loaded,
    /// The last request failed with this user-facing message.
    Failed(String),
}

/// Aggregate counts over every loaded entry, ignoring filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedStats<S> {
    pub total: usize,
    /// Count per status, in lifecycle order.
    pub by_status: Vec<(S, usize)>,
    /// Distinct contributor emails.
    pub unique_contributors: usize,
}

impl<S: PartialEq + Copy> FeedStats<S> {
    /// Count for one status.
    pub fn count(&self, status: S) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

/// A fetched list plus the user's search and status filter over it.
#[derive(Debug, Clone)]
pub struct ReviewFeed<T: FeedEntry> {
    entries: Vec<T>,
    /// Case-insensitive search term.
    pub search_term: String,
    /// Status facet.
    pub status_filter: Facet<T::Status>,
    load: LoadState,
    generation: u64,
    cursor: usize,
}

impl<T: FeedEntry> Default for ReviewFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FeedEntry> ReviewFeed<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            search_term: String::new(),
            status_filter: Facet::All,
            load: LoadState::Idle,
            generation: 0,
            cursor: 0,
        }
    }

    /// Current load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Generation of the most recent load.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// All loaded entries in backend order.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Starts a new load and returns its generation tag.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    /// Abandons any in-flight load so its reply will be ignored.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if self.load == LoadState::Loading {
            self.load = LoadState::Idle;
        }
    }

    /// Applies a load result.
    ///
    /// # Returns
    ///
    /// `false` when `generation` is stale and the result was discarded.
    pub fn accept(&mut self, generation: u64, result: Result<Vec<T>, SubmissionError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                reply_generation = generation,
                current_generation = self.generation,
                "discarding stale feed reply"
            );
            return false;
        }

        match result {
            Ok(entries) => {
                tracing::debug!(entry_count = entries.len(), "feed loaded");
                self.entries = entries;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "feed load failed");
                self.load = LoadState::Failed(e.message);
            }
        }
        self.clamp_cursor();
        true
    }

    /// Replaces the entry with the same id, if present.
    ///
    /// # Returns
    ///
    /// Whether an entry was replaced.
    pub fn replace(&mut self, updated: T) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == updated.id()) {
            Some(slot) => {
                *slot = updated;
                self.clamp_cursor();
                true
            }
            None => false,
        }
    }

    /// Entries passing the search term and status facet.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.matches_term(&needle))
            .filter(|e| self.status_filter.admits(&e.status()))
            .collect()
    }

    /// Whether the search term or the status facet narrows the list.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !self.status_filter.is_all()
    }

    /// Steps the status facet: All, each status, All.
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.cycled(T::STATUSES);
        self.clamp_cursor();
    }

    /// Applies `edit` to the search term and keeps the cursor in range.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.search_term);
        self.clamp_cursor();
    }

    /// Appends to the search term.
    pub fn push_search(&mut self, c: char) {
        self.edit_search(|term| term.push(c));
    }

    /// Index of the highlighted entry within [`visible`](Self::visible).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted entry, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.visible().get(self.cursor).copied()
    }

    /// Moves the highlight down, wrapping.
    pub fn cursor_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Moves the highlight up, wrapping.
    pub fn cursor_up(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Totals over every loaded entry.
    #[must_use]
    pub fn stats(&self) -> FeedStats<T::Status> {
        let by_status = T::STATUSES
            .iter()
            .map(|status| {
                let n = self.entries.iter().filter(|e| e.status() == *status).count();
                (*status, n)
            })
            .collect();
        let unique_contributors = self
            .entries
            .iter()
            .map(FeedEntry::contributor)
            .collect::<HashSet<_>>()
            .len();

        FeedStats {
            total: self.entries.len(),
            by_status,
            unique_contributors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactMessage, ContactStatus};
    use chrono::{TimeZone, Utc};

    fn message(id: &str, email: &str, subject: &str, status: ContactStatus) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: format!("Sender {id}"),
            email: email.to_string(),
            phone: None,
            subject: subject.to_string(),
            message: "Lovely catalog".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            status,
        }
    }

    fn loaded(entries: Vec<ContactMessage>) -> ReviewFeed<ContactMessage> {
        let mut feed = ReviewFeed::new();
        let generation = feed.begin_load();
        assert!(feed.accept(generation, Ok(entries)));
        feed
    }

    #[test]
    fn stats_count_statuses_and_distinct_emails() {
        let feed = loaded(vec![
            message("1", "a@x.io", "Hi", ContactStatus::New),
            message("2", "a@x.io", "Again", ContactStatus::Responded),
            message("3", "b@x.io", "Hey", ContactStatus::New),
        ]);

        let stats = feed.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(ContactStatus::New), 2);
        assert_eq!(stats.count(ContactStatus::Responded), 1);
        assert_eq!(stats.count(ContactStatus::Read), 0);
        assert_eq!(stats.unique_contributors, 2);
    }

    #[test]
    fn search_and_status_filter_combine() {
        let mut feed = loaded(vec![
            message("1", "a@x.io", "Thai curry question", ContactStatus::New),
            message("2", "b@x.io", "Thai dessert", ContactStatus::Read),
            message("3", "c@x.io", "Greek salad", ContactStatus::New),
        ]);

        feed.push_search('T');
        feed.push_search('H');
        feed.push_search('A');
        assert_eq!(feed.visible().len(), 2);

        feed.cycle_status_filter();
        assert_eq!(feed.status_filter, Facet::Only(ContactStatus::New));
        let ids: Vec<&str> = feed.visible().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert!(feed.is_filtered());
    }

    #[test]
    fn stale_reply_is_discarded() {
        let mut feed: ReviewFeed<ContactMessage> = ReviewFeed::new();
        let first = feed.begin_load();
        feed.invalidate();
        let second = feed.begin_load();

        assert!(!feed.accept(first, Ok(vec![message("1", "a@x.io", "Old", ContactStatus::New)])));
        assert_eq!(feed.load_state(), &LoadState::Loading);
        assert!(feed.entries().is_empty());

        assert!(feed.accept(second, Ok(vec![])));
        assert_eq!(feed.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn failure_keeps_message() {
        let mut feed: ReviewFeed<ContactMessage> = ReviewFeed::new();
        let generation = feed.begin_load();
        feed.accept(
            generation,
            Err(SubmissionError::new(Some(500), "Failed to load reviews. Please try again later.")),
        );

        assert_eq!(
            feed.load_state(),
            &LoadState::Failed("Failed to load reviews. Please try again later.".to_string())
        );
    }

    #[test]
    fn replace_updates_matching_entry() {
        let mut feed = loaded(vec![message("1", "a@x.io", "Hi", ContactStatus::New)]);
        assert!(feed.replace(message("1", "a@x.io", "Hi", ContactStatus::Read)));
        assert!(!feed.replace(message("9", "z@x.io", "Nope", ContactStatus::Read)));
        assert_eq!(feed.entries()[0].status, ContactStatus::Read);
    }

    #[test]
    fn replace_keeps_cursor_on_a_visible_row_under_status_filter() {
        let mut feed = loaded(vec![
            message("1", "a@x.io", "Hi", ContactStatus::New),
            message("2", "b@x.io", "Hello", ContactStatus::New),
        ]);
        feed.cycle_status_filter();
        feed.cursor_down();
        assert_eq!(feed.cursor(), 1);

        assert!(feed.replace(message("2", "b@x.io", "Hello", ContactStatus::Read)));
        assert_eq!(feed.visible().len(), 1);
        assert_eq!(feed.cursor(), 0);
        assert_eq!(feed.selected().map(|m| m.id.as_str()), Some("1"));
    }
}
