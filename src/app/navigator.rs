//! Page routing.
//!
//! The plugin shows one page at a time. [`ViewState`] records which page,
//! which catalog record the detail page shows, and how far the page is
//! scrolled. There is no history stack: "back" is always an explicit
//! transition to a named page.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::app::navigator::{Page, ViewState};
//!
//! let mut view = ViewState::default();
//! view.scroll_offset = 12;
//! view.navigate(Page::CuisineDetail, Some("3"));
//!
//! assert_eq!(view.current_page, Page::CuisineDetail);
//! assert_eq!(view.selected_id.as_deref(), Some("3"));
//! assert_eq!(view.scroll_offset, 0);
//! ```

use crate::catalog::Catalog;
use crate::domain::CuisineRecord;
use serde::{Deserialize, Serialize};

/// A top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Cuisines,
    CuisineDetail,
    Contact,
    Reviews,
}

impl Page {
    /// Title shown in the header bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "World Cuisines",
            Self::Cuisines => "Explore Cuisines",
            Self::CuisineDetail => "Cuisine",
            Self::Contact => "Contact Us",
            Self::Reviews => "Community Reviews",
        }
    }
}

/// What the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub current_page: Page,
    /// Record shown by the detail page. Kept when navigating away.
    pub selected_id: Option<String>,
    /// First visible row of the current page.
    pub scroll_offset: usize,
}

impl ViewState {
    /// Switches to `target`.
    ///
    /// Every transition is accepted. The scroll offset always returns to the
    /// top; `selected_id` changes only when `entity_id` is given.
    ///
    /// # Parameters
    ///
    /// * `target` - Page to show
    /// * `entity_id` - Record id for the detail page, if any
    pub fn navigate(&mut self, target: Page, entity_id: Option<&str>) {
        tracing::debug!(from = ?self.current_page, to = ?target, entity_id = ?entity_id, "navigate");
        self.current_page = target;
        if let Some(id) = entity_id {
            self.selected_id = Some(id.to_string());
        }
        self.scroll_offset = 0;
    }
}

/// Outcome of looking up the detail page's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found(&'a CuisineRecord),
    /// No record has the selected id. The only way out is back to
    /// [`Page::Cuisines`].
    NotFound { requested: Option<String> },
}

impl DetailView<'_> {
    /// Page the "back" control leads to.
    #[must_use]
    pub const fn back_target(&self) -> Page {
        Page::Cuisines
    }
}

/// Resolves the record the detail page should show.
#[must_use]
pub fn resolve_detail<'a>(catalog: &'a Catalog, view: &ViewState) -> DetailView<'a> {
    view.selected_id
        .as_deref()
        .and_then(|id| catalog.get(id))
        .map_or_else(
            || DetailView::NotFound {
                requested: view.selected_id.clone(),
            },
            DetailView::Found,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_without_id_keeps_stale_selection() {
        let mut view = ViewState::default();
        view.navigate(Page::CuisineDetail, Some("2"));
        view.scroll_offset = 5;
        view.navigate(Page::Contact, None);

        assert_eq!(view.current_page, Page::Contact);
        assert_eq!(view.selected_id.as_deref(), Some("2"));
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn unknown_id_resolves_to_not_found() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::default();
        view.navigate(Page::CuisineDetail, Some("does-not-exist"));

        let detail = resolve_detail(&catalog, &view);
        assert_eq!(
            detail,
            DetailView::NotFound {
                requested: Some("does-not-exist".to_string())
            }
        );
        assert_eq!(detail.back_target(), Page::Cuisines);
    }

    #[test]
    fn known_id_resolves_to_record() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::default();
        view.navigate(Page::CuisineDetail, Some("1"));

        match resolve_detail(&catalog, &view) {
            DetailView::Found(record) => assert_eq!(record.name, "Italian Cuisine"),
            DetailView::NotFound { .. } => panic!("expected a record"),
        }
    }

    #[test]
    fn page_serializes_kebab_case() {
        let json = serde_json::to_string(&Page::CuisineDetail).unwrap();
        assert_eq!(json, "\"cuisine-detail\"");
    }
}
