//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings, selection flags and highlight ranges; no business
//! logic lives here.
//!
//! Every page shares the same chrome (header with page tabs, optional search
//! bar, footer) and differs only in its [`PageBody`].
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::ui::viewmodel::{
//!     EmptyState, FooterInfo, HeaderInfo, PageBody, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " World Cuisines ".to_string(), tabs: vec![] },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     search_bar: None,
//!     body: PageBody::Empty(EmptyState {
//!         message: "No cuisines found".to_string(),
//!         subtitle: "Try adjusting your search criteria".to_string(),
//!     }),
//! };
//! # let _ = vm;
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title and page tabs).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Page-specific content.
    pub body: PageBody,
}

/// Content area of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    /// Selectable list of catalog records (home and cuisines pages).
    Listing(ListingView),
    /// One catalog record.
    Detail(DetailInfo),
    /// Contact or suggestion form.
    Form(FormView),
    /// Community messages or suggestions.
    Reviews(ReviewsView),
    /// Nothing to list.
    Empty(EmptyState),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
    /// Page tabs, left to right.
    pub tabs: Vec<TabInfo>,
}

/// One entry of the page tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    /// Key that opens the page.
    pub key: char,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No cuisines found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// What is being searched ("cuisines", "messages", "suggestions").
    pub scope: String,
    /// Current search query text.
    pub query: String,
    /// Number of entries the query currently admits.
    pub match_count: usize,
}

/// Listing content for the home and cuisines pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// Line above the rows ("4 cuisines found", a tagline, ...).
    pub caption: String,
    /// Facet summary; `None` on the home page.
    pub filter_bar: Option<FilterBarInfo>,
    /// Rows inside the visible window.
    pub items: Vec<DisplayItem>,
}

/// Current facet and sort selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub category: String,
    pub difficulty: String,
    pub sort: String,
    /// Whether "x: clear" is worth showing.
    pub has_active_filters: bool,
}

/// Display information for a single catalog record row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Display name, truncated to the name column.
    pub name: String,

    /// Secondary columns joined for display.
    pub details: String,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Whether the record is featured.
    pub is_featured: bool,

    /// Character ranges of `name` to highlight (search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail page content for one record, already scrolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub title: String,
    /// "Country · Category · Difficulty · Cooking time".
    pub subtitle: String,
    /// Body lines starting at the scroll offset.
    pub lines: Vec<DetailLine>,
}

/// One line of the detail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Heading(String),
    Text(String),
    Bullet(String),
    Blank,
}

/// Form page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FieldInfo>,
    pub banner: Option<BannerInfo>,
    /// A submission is in flight.
    pub submitting: bool,
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Label with a trailing `*` when required.
    pub label: String,
    /// Value, or the placeholder when empty and not being edited.
    pub text: String,
    /// Whether `text` is the placeholder.
    pub is_placeholder: bool,
    pub error: Option<String>,
    pub is_focused: bool,
    /// Whether the caret is shown.
    pub is_editing: bool,
}

/// Result banner shown near a form or the reviews list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub is_error: bool,
    pub message: String,
}

/// Reviews page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsView {
    /// "Messages" or "Suggestions".
    pub feed_label: String,
    /// Label/count pairs for the stats strip.
    pub stats: Vec<(String, usize)>,
    /// Current status facet.
    pub status_filter: String,
    pub banner: Option<BannerInfo>,
    pub body: ReviewsBody,
}

/// What the reviews list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewsBody {
    Loading,
    /// Load failed; message from the backend or the generic fallback.
    Failed(String),
    Empty(EmptyState),
    Items(Vec<ReviewItem>),
}

/// One review entry, two lines tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// Subject or cuisine name.
    pub title: String,
    /// "name <email> · date".
    pub meta: String,
    /// Truncated message text.
    pub excerpt: String,
    pub status: String,
    pub is_selected: bool,
}
