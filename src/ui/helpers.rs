//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used by the view model computation and by several
//! components. Everything here works on character indices, never byte
//! offsets, so accented cuisine names are safe to slice.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::ui::helpers::{match_ranges, truncate, wrap_text};
//!
//! assert_eq!(match_ranges("Thai Cuisine", "cui"), vec![(5, 8)]);
//! assert_eq!(truncate("Mediterranean", 8), "Medit...");
//! assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is selected (disables match highlighting)
///
/// # Selection Behavior
///
/// When `is_selected` is `true`, match highlighting is skipped so it does not
/// fight with the selection background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Non-overlapping case-insensitive occurrences of `needle` in `text`.
///
/// # Returns
///
/// `(start, end)` character ranges, end exclusive. Empty when `needle` is
/// empty.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.chars().map(fold).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Below three columns there is no room for the ellipsis, so the text is
/// cut bare.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Greedy word wrap to `width` characters.
///
/// Words longer than `width` are placed on their own line and not split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Writes `text` at `row`, padded or cut to exactly `cols` characters.
pub fn print_line(row: usize, text: &str, cols: usize) {
    position_cursor(row, 1);
    let shown = truncate(text, cols);
    let len = shown.chars().count();
    print!("{shown}{}", " ".repeat(cols.saturating_sub(len)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_is_case_insensitive() {
        assert_eq!(match_ranges("Thai Cuisine", "THAI"), vec![(0, 4)]);
        assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(match_ranges("Greek", "").is_empty());
    }

    #[test]
    fn match_ranges_counts_characters_not_bytes() {
        assert_eq!(match_ranges("Crème brûlée", "brû"), vec![(6, 9)]);
    }

    #[test]
    fn truncate_respects_multibyte_text() {
        assert_eq!(truncate("Crème brûlée", 8), "Crème...");
        assert_eq!(truncate("Pho", 8), "Pho");
    }

    #[test]
    fn truncate_never_exceeds_narrow_widths() {
        assert_eq!(truncate("Pho bo", 2), "Ph");
        assert_eq!(truncate("Pho bo", 0), "");
        assert_eq!(truncate("Pho bo", 3), "...");
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        assert_eq!(
            wrap_text("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("responded"), "Responded");
        assert_eq!(capitalize(""), "");
    }
}
