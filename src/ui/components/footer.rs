//! Footer component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints on one line.
///
/// Hints are separated by two spaces in `footer.keybindings`, each written
/// as `key: description`. Keys are drawn in the accent color and
/// descriptions dimmed. Hints that do not fit in `cols` are dropped from the
/// end instead of being cut mid-word.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for hint in footer.keybindings.split("  ").filter(|h| !h.is_empty()) {
        let width = hint.chars().count() + 2;
        if used + width > cols {
            break;
        }
        used += width;

        match hint.split_once(':') {
            Some((key, description)) => print!(
                "  {}{key}{}:{description}",
                Theme::fg(&theme.colors.accent),
                Theme::fg(&theme.colors.text_dim)
            ),
            None => print!("  {}{hint}", Theme::fg(&theme.colors.text_dim)),
        }
    }

    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());
    row + 1
}
