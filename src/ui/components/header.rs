//! Header component renderer.
//!
//! Two lines: the page title centered in the header colors, then the page
//! tab strip with the active tab in the accent color.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and tab strip starting at `row`.
///
/// # Parameters
///
/// * `row` - Row position of the title (1-indexed)
/// * `header` - Title and tabs
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
///   h Home   c Cuisines   m Contact   r Reviews
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let strip_len: usize = header
        .tabs
        .iter()
        .map(|tab| tab.label.chars().count() + 5)
        .sum();
    let strip_padding = cols.saturating_sub(strip_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(strip_padding));
    for tab in &header.tabs {
        print!("{}{}{} ", Theme::fg(&theme.colors.text_dim), tab.key, Theme::reset());
        if tab.is_active {
            print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.accent), tab.label);
        } else {
            print!("{}{}", Theme::fg(&theme.colors.text_normal), tab.label);
        }
        print!("{}   ", Theme::reset());
    }
    print!("{}", " ".repeat(cols.saturating_sub(strip_padding + strip_len)));

    row + 2
}
