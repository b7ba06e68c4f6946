//! World Cuisines: a Zellij plugin for browsing a curated catalog of world
//! cuisines, sending contact messages, suggesting new cuisines and reviewing
//! what visitors have sent.
//!
//! - Searchable, faceted and sortable cuisine listing with a detail page
//! - Declarative forms with per-field validation
//! - Submissions and review feeds over the host's web request facility
//! - Optional OpenTelemetry tracing exported to a rotating JSON file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and page navigation               │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!      │              │               │              │
//! ┌──────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐
//! │ catalog/ │  │ forms/    │  │ api/       │  │ reviews/  │
//! │ filter + │  │ fields +  │  │ requests + │  │ feeds +   │
//! │ sort     │  │ validate  │  │ envelopes  │  │ stats     │
//! └──────────┘  └───────────┘  └────────────┘  └───────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/), domain types (domain/), paths            │
//! │  (infrastructure/), tracing (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/world-cuisines.wasm" {
//!         api_url "http://localhost:5000/api"
//!         theme "olive-grove"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::{handle_event, initialize, Config, Event, Page};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (dirty, actions) = handle_event(&mut state, &Event::Navigate(Page::Cuisines))?;
//! assert!(dirty && actions.is_empty());
//! handle_event(&mut state, &Event::Select)?;
//! assert_eq!(state.view.current_page, Page::CuisineDetail);
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod observability;
pub mod reviews;
pub mod ui;

pub use api::{ApiClient, ApiReply, ApiRequest};
pub use app::{handle_event, Action, AppState, Event, InputMode, Page};
pub use catalog::Catalog;
pub use domain::{CuisineError, CuisineRecord, Result, SubmissionError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Backend address used when neither the plugin option nor the environment
/// names one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable consulted when `api_url` is not configured.
pub const API_URL_ENV: &str = "WORLD_CUISINES_API_URL";

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/world-cuisines.wasm" {
///     api_url "https://cuisines.example.org/api"
///     theme "saffron-night"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the submissions backend.
    pub api_base_url: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` means the host root. See
    /// [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Defaults to `"info"` when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as missing. `api_url` falls back to the
    /// `WORLD_CUISINES_API_URL` environment variable, then to
    /// [`DEFAULT_API_URL`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use world_cuisines::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://example.org/api".to_string());
    /// map.insert("theme".to_string(), "olive-grove".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "https://example.org/api");
    /// assert_eq!(config.theme_name.as_deref(), Some("olive-grove"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self::from_map(config, std::env::var(API_URL_ENV).ok())
    }

    fn from_map(config: &BTreeMap<String, String>, env_api_url: Option<String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_base_url = get("api_url")
            .or_else(|| env_api_url.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::resolve_user_path(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// The catalog is the embedded one. Should it fail to load the error is
/// logged and the plugin starts with an empty catalog, which the listing
/// renders as its empty state.
///
/// # Example
///
/// ```rust
/// use world_cuisines::{initialize, Config, Page};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.view.current_page, Page::Home);
/// assert_eq!(state.catalog.records().len(), 8);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing world-cuisines plugin");

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load built-in catalog");
        Catalog::default()
    });

    AppState::new(catalog, config.theme(), ApiClient::new(config.api_base_url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new(), None), Config::default());
    }

    #[test]
    fn api_url_prefers_option_then_environment() {
        let configured = Config::from_map(
            &map(&[("api_url", "https://a.example/api")]),
            Some("https://env.example/api".to_string()),
        );
        assert_eq!(configured.api_base_url, "https://a.example/api");

        let from_env = Config::from_map(&map(&[("api_url", "  ")]), Some("https://env.example/api".to_string()));
        assert_eq!(from_env.api_base_url, "https://env.example/api");
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let olive = Theme::from_name("olive-grove").unwrap();
        file.write_all(toml::to_string(&olive).unwrap().as_bytes()).unwrap();

        let config = Config::from_map(
            &map(&[
                ("theme", "saffron-night"),
                ("theme_file", file.path().to_str().unwrap()),
            ]),
            None,
        );
        assert_eq!(config.theme(), olive);
    }

    #[test]
    fn unreadable_theme_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let config = Config {
            theme_file: Some(missing.to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());

        let unknown = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.theme(), Theme::default());
    }

    #[test]
    fn initialize_uses_configured_backend() {
        let config = Config {
            api_base_url: "https://example.org/api/".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.api.base_url(), "https://example.org/api");
    }
}
