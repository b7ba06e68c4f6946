//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Columns left blank on each side of the box.
const MARGIN: usize = 2;

/// Renders a three-line framed search box.
///
/// ```text
///   ╭───────────────────────────────╮
///   │ Search cuisines: thai▏ 1 match│
///   ╰───────────────────────────────╯
/// ```
///
/// The match count is right-aligned and dropped when the box is too narrow
/// to hold both it and the query.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let margin = " ".repeat(MARGIN);

    let edge = |row: usize, left: char, right: char| {
        position_cursor(row, 1);
        print!("{margin}{border}{left}{}{right}{}", "─".repeat(inner), Theme::reset());
    };

    edge(row, '╭', '╮');

    let prompt = format!(" Search {}: {}▏", search.scope, search.query);
    let count = match search.match_count {
        1 => "1 match ".to_string(),
        n => format!("{n} matches "),
    };
    let prompt_len = prompt.chars().count();
    let (prompt, count) = if prompt_len + count.len() <= inner {
        (prompt, count)
    } else {
        (truncate(&prompt, inner), String::new())
    };
    let gap = inner.saturating_sub(prompt.chars().count() + count.len());

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}{prompt}", Theme::fg(&theme.colors.text_normal));
    print!("{}{}{count}", " ".repeat(gap), Theme::fg(&theme.colors.text_dim));
    print!("{border}│{}", Theme::reset());

    edge(row + 2, '╰', '╯');
    row + 3
}
