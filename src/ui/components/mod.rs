//! Composable UI component renderers.
//!
//! Each component draws one region of the screen and returns the next free
//! row, so a page is rendered by threading the row counter through them.
//!
//! # Components
//!
//! - [`header`]: Page title and tab strip
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Cuisine listing with facet summary
//! - [`detail`]: Cuisine detail page
//! - [`form`]: Contact and suggestion forms
//! - [`reviews`]: Contact message and suggestion feeds
//! - [`banner`]: Success or failure line
//! - [`empty`]: Empty state message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header - 2 lines]
//! [Border]
//! [Search Bar - 3 lines, cuisines page only]
//! [Page body]
//! [Border]
//! [Footer]
//! ```

mod banner;
mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod reviews;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageBody, UIViewModel};

use detail::render_detail;
use footer::render_footer;
use form::render_form;
use header::render_header;
use reviews::render_reviews;
use search::render_search_bar;
use table::render_listing;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Clears rows `from..to` so output from a previous frame does not linger.
fn clear_rows(from: usize, to: usize, cols: usize) {
    for row in from..to {
        position_cursor(row, 1);
        print!("{}", " ".repeat(cols));
    }
}

/// Renders a full page: chrome, optional search bar and the page body.
///
/// # Parameters
///
/// * `vm` - View model for the current page
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_start = rows.saturating_sub(1).max(current_row + 1);
    let border_row = footer_start.saturating_sub(1);
    let last_body_row = border_row.saturating_sub(1);

    let body_end = match &vm.body {
        PageBody::Listing(listing) => render_listing(current_row, listing, theme, cols),
        PageBody::Detail(detail) => render_detail(current_row, detail, theme, cols),
        PageBody::Form(form) => render_form(current_row, form, theme, cols, last_body_row),
        PageBody::Reviews(view) => render_reviews(current_row, view, theme, cols),
        PageBody::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
    };
    clear_rows(body_end, border_row, cols);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
