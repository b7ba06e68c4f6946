//! Domain layer for the World Cuisines plugin.
//!
//! Holds the data types shared by every other layer, independent of Zellij
//! APIs and of rendering:
//!
//! - [`error`]: Error types and result alias
//! - [`cuisine`]: Catalog record, difficulty and category vocabulary
//! - [`contact`]: Contact messages and their status lifecycle
//! - [`suggestion`]: Cuisine suggestions and their moderation lifecycle
//!
//! # Examples
//!
//! ```
//! use world_cuisines::domain::{ContactStatus, Difficulty};
//!
//! assert!(Difficulty::Easy < Difficulty::Hard);
//! assert_eq!(ContactStatus::New.next(), Some(ContactStatus::Read));
//! ```

pub mod contact;
pub mod cuisine;
pub mod error;
pub mod suggestion;

pub use contact::{ContactMessage, ContactPayload, ContactStatus, StatusUpdate};
pub use cuisine::{CuisineRecord, Difficulty, KNOWN_CATEGORIES};
pub use error::{CuisineError, Result, SubmissionError};
pub use suggestion::{CuisineSuggestion, SuggestionPayload, SuggestionStatus};
