//! Empty state component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting two rows below `row`.
///
/// Used for an empty listing, an unknown detail id and an empty review feed.
/// The message is bold in `empty_state_fg`; the subtitle is dimmed.
///
/// # Returns
///
/// The row after the subtitle
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 2;

    let message_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    centered(message_row, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered(message_row + 1, &empty.subtitle, &subtitle_style, cols);

    message_row + 2
}

fn centered(row: usize, text: &str, style: &str, cols: usize) {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}
