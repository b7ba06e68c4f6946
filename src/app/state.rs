//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the plugin
//! shows: the catalog and its listing query, the current page, both forms and
//! their submission status, and the two review feeds. The event handler
//! mutates it; [`AppState::compute_viewmodel`] reads it.
//!
//! # State Components
//!
//! - **Catalog + query**: Static records and the user's search, facets and sort
//! - **View**: Current page, detail record id, scroll offset
//! - **Selection**: Cursor within the home or cuisines listing
//! - **Forms**: Contact and suggestion [`FormEngine`]s with [`SubmitStatus`]
//! - **Feeds**: Contact messages and suggestions for the reviews page
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::api::ApiClient;
//! use world_cuisines::app::AppState;
//! use world_cuisines::catalog::Catalog;
//! use world_cuisines::ui::Theme;
//!
//! let catalog = Catalog::builtin()?;
//! let state = AppState::new(catalog, Theme::default(), ApiClient::new("http://localhost:5000/api"));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # let _ = viewmodel;
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

use super::actions::Action;
use super::modes::{FeedKind, FormKind, InputMode};
use super::navigator::{resolve_detail, DetailView, Page, ViewState};
use crate::api::{self, ApiClient, ApiReply, RequestKind, CONTEXT_GENERATION};
use crate::catalog::{filter_and_sort, Catalog, Facet, FilterQuery};
use crate::domain::{
    ContactMessage, ContactPayload, CuisineRecord, CuisineSuggestion, SubmissionError, SuggestionPayload,
};
use crate::forms::{presets, FormEngine};
use crate::reviews::{FeedEntry, LoadState, ReviewFeed};
use crate::ui::helpers::{capitalize, match_ranges, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, DetailInfo, DetailLine, DisplayItem, EmptyState, FieldInfo, FilterBarInfo,
    FooterInfo, FormView, HeaderInfo, ListingView, PageBody, ReviewItem, ReviewsBody, ReviewsView,
    SearchBarInfo, TabInfo, UIViewModel,
};
use std::ops::Range;

/// Shown after a contact message is stored.
pub const CONTACT_THANKS: &str =
    "Thank you for reaching out! We've received your message and will get back to you within 24 hours.";

/// Shown after a suggestion is stored.
pub const SUGGESTION_THANKS: &str =
    "Thank you for your suggestion! We'll review it for inclusion in our collection.";

/// Blank line, title, tabs, top border, bottom border, footer.
const CHROME_ROWS: usize = 6;
/// Search box height.
const SEARCH_BAR_ROWS: usize = 3;
/// Caption and filter bar above listing rows.
const LISTING_HEADER_ROWS: usize = 2;
/// Title, subtitle and spacer above detail lines.
const DETAIL_HEADER_ROWS: usize = 3;
/// Stats, filter and spacer above review items.
const REVIEWS_HEADER_ROWS: usize = 3;
/// Each review item takes two rows.
const REVIEW_ITEM_ROWS: usize = 2;
const NAME_COLUMN_WIDTH: usize = 28;

/// Outcome shown near a form or the reviews list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Failure(String),
}

/// Submission lifecycle of one submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitStatus {
    /// A request is on the wire; further submits are ignored.
    pub in_flight: bool,
    /// Result of the last completed request.
    pub banner: Option<Banner>,
}

/// Terminal size last handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static cuisine records.
    pub catalog: Catalog,

    /// Search, facets and sort of the cuisines listing.
    pub query: FilterQuery,

    /// Current page and detail selection.
    pub view: ViewState,

    /// Zero-based cursor within the home or cuisines listing.
    ///
    /// Clamped by `clamp_selection()` whenever the listing changes.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Form shown on the contact page.
    pub form_kind: FormKind,
    pub contact_form: FormEngine,
    pub contact_submit: SubmitStatus,
    pub suggestion_form: FormEngine,
    pub suggestion_submit: SubmitStatus,

    /// Records listed on the reviews page.
    pub feed_kind: FeedKind,
    pub messages: ReviewFeed<ContactMessage>,
    pub suggestions: ReviewFeed<CuisineSuggestion>,
    /// Status change of a contact message.
    pub status_update: SubmitStatus,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Request builder for the backend.
    pub api: ApiClient,

    /// Size of the last render.
    pub viewport: Viewport,
}

impl AppState {
    /// Creates the initial state: home page, default query, empty forms,
    /// nothing loaded.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Records to browse
    /// * `theme` - Color scheme for UI rendering
    /// * `api` - Request builder for the configured backend
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, api: ApiClient) -> Self {
        Self {
            catalog,
            query: FilterQuery::default(),
            view: ViewState::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            form_kind: FormKind::Contact,
            contact_form: presets::contact_form(),
            contact_submit: SubmitStatus::default(),
            suggestion_form: presets::suggestion_form(),
            suggestion_submit: SubmitStatus::default(),
            feed_kind: FeedKind::Messages,
            messages: ReviewFeed::new(),
            suggestions: ReviewFeed::new(),
            status_update: SubmitStatus::default(),
            theme,
            api,
            viewport: Viewport::default(),
        }
    }

    /// Records matching the current query, in sort order.
    #[must_use]
    pub fn results(&self) -> Vec<&CuisineRecord> {
        filter_and_sort(self.catalog.records(), &self.query)
    }

    /// Featured records, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&CuisineRecord> {
        self.catalog.featured().collect()
    }

    fn listing(&self) -> Vec<&CuisineRecord> {
        match self.view.current_page {
            Page::Home => self.featured(),
            Page::Cuisines => self.results(),
            _ => Vec::new(),
        }
    }

    /// Record under the listing cursor, if the page has a listing.
    #[must_use]
    pub fn selected_record(&self) -> Option<&CuisineRecord> {
        self.listing().get(self.selected_index).copied()
    }

    /// Keeps the listing cursor inside the listing.
    pub fn clamp_selection(&mut self) {
        let len = self.listing().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
        tracing::trace!(listing_len = len, selected_index = self.selected_index, "selection clamped");
    }

    /// Moves the cursor of the current page down, wrapping where the page
    /// has a list.
    ///
    /// On the detail page this scrolls; on the contact page it moves field
    /// focus.
    pub fn move_selection_down(&mut self) {
        match self.view.current_page {
            Page::Home | Page::Cuisines => {
                let len = self.listing().len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1) % len;
                }
            }
            Page::CuisineDetail => {
                let max = self.max_detail_scroll();
                self.view.scroll_offset = (self.view.scroll_offset + 1).min(max);
            }
            Page::Contact => self.active_form_mut().focus_next(),
            Page::Reviews => match self.feed_kind {
                FeedKind::Messages => self.messages.cursor_down(),
                FeedKind::Suggestions => self.suggestions.cursor_down(),
            },
        }
    }

    /// Moves the cursor of the current page up. Mirror of
    /// [`move_selection_down`](Self::move_selection_down).
    pub fn move_selection_up(&mut self) {
        match self.view.current_page {
            Page::Home | Page::Cuisines => {
                let len = self.listing().len();
                if len > 0 {
                    self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
                }
            }
            Page::CuisineDetail => {
                self.view.scroll_offset = self.view.scroll_offset.saturating_sub(1);
            }
            Page::Contact => self.active_form_mut().focus_prev(),
            Page::Reviews => match self.feed_kind {
                FeedKind::Messages => self.messages.cursor_up(),
                FeedKind::Suggestions => self.suggestions.cursor_up(),
            },
        }
    }

    fn max_detail_scroll(&self) -> usize {
        let DetailView::Found(record) = resolve_detail(&self.catalog, &self.view) else {
            return 0;
        };
        let lines = detail_lines(record, detail_width(self.viewport.cols)).len();
        let visible = self.viewport.rows.saturating_sub(CHROME_ROWS + DETAIL_HEADER_ROWS);
        lines.saturating_sub(visible)
    }

    /// Switches page and performs the page's entry work.
    ///
    /// Leaving the reviews page abandons any in-flight feed load; entering it
    /// starts a fresh one.
    ///
    /// # Returns
    ///
    /// Actions to execute (a feed request when entering the reviews page).
    pub fn navigate(&mut self, target: Page, entity_id: Option<&str>) -> Vec<Action> {
        let leaving = self.view.current_page;
        if leaving == Page::Reviews && target != Page::Reviews {
            self.messages.invalidate();
            self.suggestions.invalidate();
        }

        self.view.navigate(target, entity_id);
        self.input_mode = InputMode::Normal;
        self.selected_index = 0;

        if target == Page::Reviews && leaving != Page::Reviews {
            vec![self.load_feed()]
        } else {
            vec![]
        }
    }

    /// Starts loading the active feed.
    ///
    /// # Returns
    ///
    /// The request to dispatch, tagged with the load's generation.
    pub fn load_feed(&mut self) -> Action {
        let (generation, request) = match self.feed_kind {
            FeedKind::Messages => (self.messages.begin_load(), self.api.list_contacts()),
            FeedKind::Suggestions => (self.suggestions.begin_load(), self.api.list_suggestions()),
        };
        tracing::debug!(feed = ?self.feed_kind, generation, "loading feed");
        Action::Dispatch(request.with_context(CONTEXT_GENERATION, generation.to_string()))
    }

    /// Form shown on the contact page.
    #[must_use]
    pub const fn active_form(&self) -> &FormEngine {
        match self.form_kind {
            FormKind::Contact => &self.contact_form,
            FormKind::Suggestion => &self.suggestion_form,
        }
    }

    /// Mutable form shown on the contact page.
    pub fn active_form_mut(&mut self) -> &mut FormEngine {
        match self.form_kind {
            FormKind::Contact => &mut self.contact_form,
            FormKind::Suggestion => &mut self.suggestion_form,
        }
    }

    /// Submission status of the active form.
    #[must_use]
    pub const fn active_submit(&self) -> &SubmitStatus {
        match self.form_kind {
            FormKind::Contact => &self.contact_submit,
            FormKind::Suggestion => &self.suggestion_submit,
        }
    }

    /// Mutable submission status of the active form.
    pub fn active_submit_mut(&mut self) -> &mut SubmitStatus {
        match self.form_kind {
            FormKind::Contact => &mut self.contact_submit,
            FormKind::Suggestion => &mut self.suggestion_submit,
        }
    }

    /// Validates the active form and builds its request.
    ///
    /// Ignored while a submission of the same form is in flight. Validation
    /// failures stay in the form's error map and produce no request.
    ///
    /// # Returns
    ///
    /// `Some(Action::Dispatch)` when a request was built.
    pub fn submit_active_form(&mut self) -> Option<Action> {
        if self.active_submit().in_flight {
            tracing::debug!(form = ?self.form_kind, "submit ignored, request in flight");
            return None;
        }

        let api = &self.api;
        let (built, fallback) = match self.form_kind {
            FormKind::Contact => (
                self.contact_form
                    .submit(|values| api.submit_contact(&ContactPayload::from_values(values))),
                api::CONTACT_FAILED,
            ),
            FormKind::Suggestion => (
                self.suggestion_form
                    .submit(|values| api.submit_suggestion(&SuggestionPayload::from_values(values))),
                api::SUGGESTION_FAILED,
            ),
        };

        let status = self.active_submit_mut();
        match built? {
            Ok(request) => {
                status.in_flight = true;
                status.banner = None;
                tracing::debug!(url = %request.url, "form submitted");
                Some(Action::Dispatch(request))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode submission");
                status.banner = Some(Banner::Failure(fallback.to_string()));
                None
            }
        }
    }

    /// Requests the next status for the highlighted contact message.
    ///
    /// # Returns
    ///
    /// `None` when not on the messages feed, nothing is highlighted, the
    /// status is already final, or an update is in flight.
    pub fn advance_status(&mut self) -> Option<Action> {
        if self.view.current_page != Page::Reviews || self.feed_kind != FeedKind::Messages {
            return None;
        }
        if self.status_update.in_flight {
            tracing::debug!("status update ignored, request in flight");
            return None;
        }

        let message = self.messages.selected()?;
        let next = message.status.next()?;
        match self.api.update_contact_status(&message.id, next) {
            Ok(request) => {
                tracing::debug!(id = %message.id, status = %next, "advancing message status");
                self.status_update.in_flight = true;
                self.status_update.banner = None;
                Some(Action::Dispatch(request))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode status update");
                self.status_update.banner = Some(Banner::Failure(api::STATUS_FAILED.to_string()));
                None
            }
        }
    }

    /// Applies a backend reply.
    ///
    /// # Returns
    ///
    /// Whether anything visible changed.
    pub fn apply_reply(&mut self, reply: &ApiReply) -> bool {
        let Some(kind) = reply.kind() else {
            tracing::warn!(status = reply.status, "reply without a known request kind");
            return false;
        };

        match kind {
            RequestKind::SubmitContact => {
                let result = api::decode_contact(reply).map(|_| ());
                Self::finish_submit(&mut self.contact_form, &mut self.contact_submit, result, CONTACT_THANKS);
                true
            }
            RequestKind::SubmitSuggestion => {
                let result = api::decode_suggestion(reply).map(|_| ());
                Self::finish_submit(
                    &mut self.suggestion_form,
                    &mut self.suggestion_submit,
                    result,
                    SUGGESTION_THANKS,
                );
                true
            }
            RequestKind::ListContacts => {
                let Some(generation) = reply.generation() else {
                    tracing::warn!("feed reply without generation");
                    return false;
                };
                self.messages.accept(generation, api::decode_contacts(reply))
            }
            RequestKind::ListSuggestions => {
                let Some(generation) = reply.generation() else {
                    tracing::warn!("feed reply without generation");
                    return false;
                };
                self.suggestions.accept(generation, api::decode_suggestions(reply))
            }
            RequestKind::UpdateContactStatus => {
                self.status_update.in_flight = false;
                match api::decode_status_update(reply) {
                    Ok(updated) => {
                        tracing::debug!(id = %updated.id, status = %updated.status, "status updated");
                        self.messages.replace(updated);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "status update failed");
                        self.status_update.banner = Some(Banner::Failure(e.message));
                    }
                }
                true
            }
        }
    }

    fn finish_submit(
        form: &mut FormEngine,
        status: &mut SubmitStatus,
        result: Result<(), SubmissionError>,
        thanks: &str,
    ) {
        status.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("submission stored");
                form.reset();
                status.banner = Some(Banner::Success(thanks.to_string()));
            }
            Err(e) => {
                tracing::warn!(status = ?e.status, error = %e, "submission rejected");
                status.banner = Some(Banner::Failure(e.message));
            }
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// Lists longer than the space left after chrome are windowed around the
    /// cursor: the selection sits at the middle of the window unless the
    /// window is pinned against the start or the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let search_bar = self.compute_search_bar();
        let chrome = if search_bar.is_some() {
            CHROME_ROWS + SEARCH_BAR_ROWS
        } else {
            CHROME_ROWS
        };
        let body_rows = rows.saturating_sub(chrome);

        let body = match self.view.current_page {
            Page::Home | Page::Cuisines => self.compute_listing(body_rows, cols),
            Page::CuisineDetail => self.compute_detail(body_rows, cols),
            Page::Contact => PageBody::Form(self.compute_form()),
            Page::Reviews => PageBody::Reviews(self.compute_reviews(body_rows, cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar,
            body,
        }
    }

    fn compute_listing(&self, body_rows: usize, cols: usize) -> PageBody {
        let is_home = self.view.current_page == Page::Home;
        let records = self.listing();

        if records.is_empty() {
            return PageBody::Empty(if is_home {
                EmptyState {
                    message: "No featured cuisines".to_string(),
                    subtitle: "Press c to browse the full catalog".to_string(),
                }
            } else {
                EmptyState {
                    message: "No cuisines found".to_string(),
                    subtitle: "Try adjusting your search criteria or browse all available cuisines."
                        .to_string(),
                }
            });
        }

        let capacity = body_rows.saturating_sub(LISTING_HEADER_ROWS);
        let window = visible_window(self.selected_index, records.len(), capacity);
        let needle = if is_home { "" } else { self.query.search_term.as_str() };
        let details_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 2);

        let items = records[window.clone()]
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                let name = truncate(&record.name, NAME_COLUMN_WIDTH - 2);
                let details = format!(
                    "{} · {} · {} · {}",
                    record.country, record.category, record.difficulty, record.cooking_time
                );
                DisplayItem {
                    highlight_ranges: match_ranges(&name, needle),
                    name,
                    details: truncate(&details, details_width),
                    is_selected: window.start + relative_idx == self.selected_index,
                    is_featured: record.featured,
                }
            })
            .collect();

        let (caption, filter_bar) = if is_home {
            (
                "Featured cuisines from around the world".to_string(),
                None,
            )
        } else {
            let count = records.len();
            let noun = if count == 1 { "cuisine" } else { "cuisines" };
            (
                format!("{count} {noun} found"),
                Some(FilterBarInfo {
                    category: facet_label(&self.query.category),
                    difficulty: facet_label(&self.query.difficulty),
                    sort: self.query.sort_key.label().to_string(),
                    has_active_filters: self.query.has_active_filters(),
                }),
            )
        };

        PageBody::Listing(ListingView {
            caption,
            filter_bar,
            items,
        })
    }

    fn compute_detail(&self, body_rows: usize, cols: usize) -> PageBody {
        match resolve_detail(&self.catalog, &self.view) {
            DetailView::NotFound { .. } => PageBody::Empty(EmptyState {
                message: "Cuisine Not Found".to_string(),
                subtitle: "Press Enter to go back to cuisines".to_string(),
            }),
            DetailView::Found(record) => {
                let lines = detail_lines(record, detail_width(cols));
                let visible = body_rows.saturating_sub(DETAIL_HEADER_ROWS);
                let offset = self.view.scroll_offset.min(lines.len().saturating_sub(visible));
                PageBody::Detail(DetailInfo {
                    title: record.name.clone(),
                    subtitle: format!(
                        "{} · {} · {} · {}",
                        record.country, record.category, record.difficulty, record.cooking_time
                    ),
                    lines: lines.into_iter().skip(offset).take(visible).collect(),
                })
            }
        }
    }

    fn compute_form(&self) -> FormView {
        let form = self.active_form();
        let status = self.active_submit();
        let editing = self.input_mode == InputMode::Editing;

        let fields = form
            .fields()
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let value = form.value(&field.name).unwrap_or_default();
                let is_focused = idx == form.focused();
                let is_editing = is_focused && editing;
                let is_placeholder = value.is_empty() && !is_editing;
                FieldInfo {
                    label: if field.required {
                        format!("{} *", field.label)
                    } else {
                        field.label.clone()
                    },
                    text: if is_placeholder {
                        field.placeholder.clone()
                    } else {
                        value.to_string()
                    },
                    is_placeholder,
                    error: form.error(&field.name).map(str::to_string),
                    is_focused,
                    is_editing,
                }
            })
            .collect();

        FormView {
            title: match self.form_kind {
                FormKind::Contact => "Send us a Message".to_string(),
                FormKind::Suggestion => "Suggest a Cuisine".to_string(),
            },
            fields,
            banner: status.banner.as_ref().map(banner_info),
            submitting: status.in_flight,
        }
    }

    fn compute_reviews(&self, body_rows: usize, cols: usize) -> ReviewsView {
        let capacity = body_rows.saturating_sub(REVIEWS_HEADER_ROWS) / REVIEW_ITEM_ROWS;
        let width = cols.saturating_sub(4);

        match self.feed_kind {
            FeedKind::Messages => reviews_view(
                &self.messages,
                ("Messages", "No messages found", "No community messages have been submitted yet"),
                capacity,
                self.status_update.banner.as_ref(),
                |m| ReviewItem {
                    title: truncate(&m.subject, width),
                    meta: truncate(
                        &format!("{} <{}> · {}", m.name, m.email, m.created_at.format("%Y-%m-%d")),
                        width,
                    ),
                    excerpt: truncate(&m.message.replace('\n', " "), width),
                    status: m.status.to_string(),
                    is_selected: false,
                },
            ),
            FeedKind::Suggestions => reviews_view(
                &self.suggestions,
                (
                    "Suggestions",
                    "No suggestions found",
                    "No cuisine suggestions have been submitted yet",
                ),
                capacity,
                None,
                |s| ReviewItem {
                    title: truncate(&format!("{} ({}, {})", s.cuisine_name, s.country, s.category), width),
                    meta: truncate(
                        &format!("{} <{}> · {}", s.suggested_by, s.email, s.created_at.format("%Y-%m-%d")),
                        width,
                    ),
                    excerpt: truncate(&s.description.replace('\n', " "), width),
                    status: s.status.to_string(),
                    is_selected: false,
                },
            ),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let active = match self.view.current_page {
            Page::CuisineDetail => Page::Cuisines,
            page => page,
        };
        let tabs = [
            (Page::Home, "Home", 'h'),
            (Page::Cuisines, "Cuisines", 'c'),
            (Page::Contact, "Contact", 'm'),
            (Page::Reviews, "Reviews", 'r'),
        ]
        .into_iter()
        .map(|(page, label, key)| TabInfo {
            label: label.to_string(),
            key,
            is_active: page == active,
        })
        .collect();

        HeaderInfo {
            title: format!(" {} ", self.view.current_page.title()),
            tabs,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view.current_page) {
            (InputMode::Search, _) => "ESC: clear search  Enter: done  Type to filter",
            (InputMode::Editing, _) => {
                "ESC: stop editing  Tab/Shift+Tab: field  Ctrl+s: submit  Type to edit"
            }
            (InputMode::Normal, Page::Home) => "j/k: navigate  Enter: explore  h/c/m/r: pages  q: quit",
            (InputMode::Normal, Page::Cuisines) => {
                "j/k: navigate  /: search  Tab: category  d: difficulty  s: sort  x: clear  Enter: open  q: quit"
            }
            (InputMode::Normal, Page::CuisineDetail) => "j/k: scroll  b/ESC: back  h/c/m/r: pages  q: quit",
            (InputMode::Normal, Page::Contact) => {
                "i/Enter: edit  j/k: field  Ctrl+s: submit  g: switch form  h/c/m/r: pages  q: quit"
            }
            (InputMode::Normal, Page::Reviews) => {
                "j/k: navigate  /: search  f: status  t: messages/suggestions  R: reload  S: advance status  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.input_mode != InputMode::Search {
            return None;
        }
        let (scope, query, match_count) = match (self.view.current_page, self.feed_kind) {
            (Page::Reviews, FeedKind::Messages) => (
                "messages",
                &self.messages.search_term,
                self.messages.visible().len(),
            ),
            (Page::Reviews, FeedKind::Suggestions) => (
                "suggestions",
                &self.suggestions.search_term,
                self.suggestions.visible().len(),
            ),
            _ => ("cuisines", &self.query.search_term, self.results().len()),
        };
        Some(SearchBarInfo {
            scope: scope.to_string(),
            query: query.clone(),
            match_count,
        })
    }
}

fn detail_width(cols: usize) -> usize {
    cols.saturating_sub(4).max(20)
}

/// Body lines of the detail page, wrapped to `width`.
fn detail_lines(record: &CuisineRecord, width: usize) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    let mut section = |heading: &str, body: Vec<DetailLine>| {
        if body.is_empty() {
            return;
        }
        if !lines.is_empty() {
            lines.push(DetailLine::Blank);
        }
        lines.push(DetailLine::Heading(heading.to_string()));
        lines.extend(body);
    };

    section(
        "About",
        wrap_text(&record.description, width).into_iter().map(DetailLine::Text).collect(),
    );
    section(
        "History & Culture",
        wrap_text(&record.history, width).into_iter().map(DetailLine::Text).collect(),
    );
    section(
        "Key Ingredients",
        record.ingredients.iter().cloned().map(DetailLine::Bullet).collect(),
    );
    section(
        "Popular Dishes",
        record.popular_dishes.iter().cloned().map(DetailLine::Bullet).collect(),
    );
    lines
}

fn visible_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(len);
    if end - start < capacity && len >= capacity {
        start = end.saturating_sub(capacity);
    }
    start..end
}

fn facet_label<T: ToString>(facet: &Facet<T>) -> String {
    match facet {
        Facet::All => "All".to_string(),
        Facet::Only(value) => value.to_string(),
    }
}

fn banner_info(banner: &Banner) -> BannerInfo {
    match banner {
        Banner::Success(message) => BannerInfo {
            is_error: false,
            message: message.clone(),
        },
        Banner::Failure(message) => BannerInfo {
            is_error: true,
            message: message.clone(),
        },
    }
}

fn reviews_view<T: FeedEntry>(
    feed: &ReviewFeed<T>,
    (feed_label, empty_message, never_submitted): (&str, &str, &str),
    capacity: usize,
    banner: Option<&Banner>,
    to_item: impl Fn(&T) -> ReviewItem,
) -> ReviewsView {
    let stats = feed.stats();
    let mut stat_pairs = vec![("Total".to_string(), stats.total)];
    stat_pairs.extend(
        stats
            .by_status
            .iter()
            .map(|(status, count)| (capitalize(&status.to_string()), *count)),
    );
    stat_pairs.push(("Contributors".to_string(), stats.unique_contributors));

    let body = match feed.load_state() {
        LoadState::Idle | LoadState::Loading => ReviewsBody::Loading,
        LoadState::Failed(message) => ReviewsBody::Failed(message.clone()),
        LoadState::Loaded => {
            let visible = feed.visible();
            if visible.is_empty() {
                ReviewsBody::Empty(EmptyState {
                    message: empty_message.to_string(),
                    subtitle: if feed.is_filtered() {
                        "Try adjusting your search criteria".to_string()
                    } else {
                        never_submitted.to_string()
                    },
                })
            } else {
                let window = visible_window(feed.cursor(), visible.len(), capacity);
                ReviewsBody::Items(
                    visible[window.clone()]
                        .iter()
                        .enumerate()
                        .map(|(relative_idx, entry)| ReviewItem {
                            is_selected: window.start + relative_idx == feed.cursor(),
                            ..to_item(*entry)
                        })
                        .collect(),
                )
            }
        }
    };

    ReviewsView {
        feed_label: feed_label.to_string(),
        stats: stat_pairs,
        status_filter: facet_label(&feed.status_filter),
        banner: banner.map(banner_info),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::PageBody;

    fn state() -> AppState {
        AppState::new(
            Catalog::builtin().unwrap(),
            Theme::default(),
            ApiClient::new("http://localhost:5000/api"),
        )
    }

    #[test]
    fn home_lists_featured_records() {
        let state = state();
        let PageBody::Listing(listing) = state.compute_viewmodel(24, 80).body else {
            panic!("expected listing");
        };
        assert_eq!(listing.items.len(), 4);
        assert!(listing.items.iter().all(|i| i.is_featured));
        assert!(listing.filter_bar.is_none());
    }

    #[test]
    fn cuisines_listing_reports_count_and_highlights() {
        let mut state = state();
        state.navigate(Page::Cuisines, None);
        state.query.search_term = "thai".to_string();

        let PageBody::Listing(listing) = state.compute_viewmodel(24, 80).body else {
            panic!("expected listing");
        };
        assert_eq!(listing.caption, "1 cuisine found");
        assert_eq!(listing.items[0].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn empty_results_show_empty_state() {
        let mut state = state();
        state.navigate(Page::Cuisines, None);
        state.query.search_term = "zzzz".to_string();

        let PageBody::Empty(empty) = state.compute_viewmodel(24, 80).body else {
            panic!("expected empty state");
        };
        assert_eq!(empty.message, "No cuisines found");
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(visible_window(0, 10, 4), 0..4);
        assert_eq!(visible_window(5, 10, 4), 3..7);
        assert_eq!(visible_window(9, 10, 4), 6..10);
        assert_eq!(visible_window(1, 2, 4), 0..2);
    }

    #[test]
    fn detail_scroll_is_bounded() {
        let mut state = state();
        state.navigate(Page::CuisineDetail, Some("1"));
        for _ in 0..500 {
            state.move_selection_down();
        }
        assert_eq!(state.view.scroll_offset, state.max_detail_scroll());

        state.navigate(Page::Cuisines, None);
        assert_eq!(state.view.scroll_offset, 0);
    }

    #[test]
    fn entering_reviews_dispatches_feed_load() {
        let mut state = state();
        let actions = state.navigate(Page::Reviews, None);
        let [Action::Dispatch(request)] = actions.as_slice() else {
            panic!("expected one dispatch");
        };
        assert_eq!(request.kind(), Some(RequestKind::ListContacts));
        assert_eq!(request.context.get(CONTEXT_GENERATION).map(String::as_str), Some("1"));
        assert_eq!(state.messages.load_state(), &LoadState::Loading);
    }
}
