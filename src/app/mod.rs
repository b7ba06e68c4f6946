//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the catalog,
//! forms, API and review modules. It owns all mutable state and is the only
//! code that decides what happens in response to input.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───────── Backend Replies ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and page-local toggles
//! - [`navigator`]: Current page, detail selection and scroll position
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigator;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FeedKind, FormKind, InputMode};
pub use navigator::{resolve_detail, DetailView, Page, ViewState};
pub use state::{AppState, Banner, SubmitStatus, Viewport};
