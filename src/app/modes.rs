//! Input and sub-view mode types.
//!
//! These enums decide how a key press is interpreted and which variant of a
//! page is shown.
//!
//! # State Machine
//!
//! The application is always in one of three input modes:
//! - **Normal**: Keys are commands (navigate, cycle facets, submit)
//! - **Search**: Printable keys extend the current page's search term
//! - **Editing**: Printable keys extend the focused form field
//!
//! Two page-local toggles sit alongside the input mode:
//! - [`FormKind`] picks the contact form or the suggestion form on the contact page
//! - [`FeedKind`] picks contact messages or suggestions on the reviews page
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::app::modes::{FeedKind, FormKind, InputMode};
//!
//! let mode = InputMode::Editing;
//! assert_eq!(FormKind::Contact.toggled(), FormKind::Suggestion);
//! assert_eq!(FeedKind::Messages.toggled(), FeedKind::Suggestions);
//! # let _ = mode;
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and how printable characters are
/// routed. Determines the footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Normal,

    /// Characters go to the search term of the current page.
    ///
    /// Available on the cuisines listing and the reviews page.
    Search,

    /// Characters go to the focused field of the active form.
    Editing,
}

/// Which form the contact page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    /// General contact message.
    #[default]
    Contact,
    /// Proposal for a new cuisine.
    Suggestion,
}

impl FormKind {
    /// The other form.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Contact => Self::Suggestion,
            Self::Suggestion => Self::Contact,
        }
    }
}

/// Which records the reviews page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedKind {
    /// Persisted contact messages.
    #[default]
    Messages,
    /// Persisted cuisine suggestions.
    Suggestions,
}

impl FeedKind {
    /// The other feed.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Messages => Self::Suggestions,
            Self::Suggestions => Self::Messages,
        }
    }
}
