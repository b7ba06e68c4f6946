//! Listing component renderer.
//!
//! Renders catalog records as a two-column table (NAME, DETAILS) under a
//! caption line and, on the cuisines page, a facet summary line. Supports
//! selection highlighting and search match highlighting.

use crate::ui::helpers::{self, position_cursor, print_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, FilterBarInfo, ListingView};

/// Width of the NAME column including its trailing gap.
const NAME_COLUMN: usize = 30;

/// Renders the caption, filter bar and rows of a listing.
///
/// # Parameters
///
/// * `row` - First row of the content area (1-indexed)
/// * `listing` - Caption, facets and visible rows
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position
pub fn render_listing(row: usize, listing: &ListingView, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_line(row, &format!(" {}", listing.caption), cols);
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    if let Some(filter_bar) = &listing.filter_bar {
        current_row = render_filter_bar(current_row, filter_bar, theme, cols);
    }

    for item in &listing.items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders "Category: … Difficulty: … Sort: …" on one line.
fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let segments = [
        ("Category", bar.category.as_str()),
        ("Difficulty", bar.difficulty.as_str()),
        ("Sort", bar.sort.as_str()),
    ];

    let mut len = 0;
    for (label, value) in segments {
        let text = format!(" {label}: ");
        len += text.chars().count() + value.chars().count() + 1;
        print!("{}{text}", Theme::fg(&theme.colors.text_dim));
        print!("{}{}{value}{} ", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset());
    }
    if bar.has_active_filters {
        let hint = "  x: clear";
        len += hint.len();
        print!("{}{hint}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{}", " ".repeat(cols.saturating_sub(len)), Theme::reset());
    row + 1
}

/// Renders a single listing row.
///
/// # Layout
///
/// ```text
/// * NAME (28 chars) DETAILS (remaining width) [padding to fill line]
/// ```
///
/// Featured records carry a `*` marker. The row is padded to the full width
/// so the selection background spans the line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    if item.is_featured && !item.is_selected {
        print!("{}*{base} ", Theme::fg(&theme.colors.accent));
    } else if item.is_featured {
        print!("* ");
    } else {
        print!("  ");
    }

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    if !item.highlight_ranges.is_empty() && !item.is_selected {
        print!("{base}");
    }

    let name_len = item.name.chars().count() + 2;
    print!("{}", " ".repeat(NAME_COLUMN.saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.details);

    let line_len = NAME_COLUMN.max(name_len) + item.details.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
