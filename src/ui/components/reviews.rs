//! Review feed renderer.

use super::banner::render_banner;
use super::empty::render_empty_state;
use crate::ui::helpers::{position_cursor, print_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ReviewItem, ReviewsBody, ReviewsView};

/// Renders the stats strip, status filter and the feed body.
///
/// # Returns
///
/// The next available row position
pub fn render_reviews(row: usize, view: &ReviewsView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" {}{}{}{}", Theme::bold(), Theme::fg(&theme.colors.accent), view.feed_label, Theme::reset());
    let mut len = view.feed_label.chars().count() + 1;
    for (label, count) in &view.stats {
        let text = format!("  {label} {count}");
        len += text.chars().count();
        print!("{}{text}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}{}", " ".repeat(cols.saturating_sub(len)), Theme::reset());

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_line(row + 1, &format!(" Status: {}", view.status_filter), cols);
    print!("{}", Theme::reset());

    let mut current_row = row + 2;
    if let Some(banner) = &view.banner {
        current_row = render_banner(current_row, banner, theme, cols);
    } else {
        print_line(current_row, "", cols);
        current_row += 1;
    }

    match &view.body {
        ReviewsBody::Loading => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_line(current_row, &format!(" Loading {}...", view.feed_label.to_lowercase()), cols);
            print!("{}", Theme::reset());
            current_row + 1
        }
        ReviewsBody::Failed(message) => {
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print_line(current_row, &format!(" {message}"), cols);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_line(current_row + 1, " R: retry", cols);
            print!("{}", Theme::reset());
            current_row + 2
        }
        ReviewsBody::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        ReviewsBody::Items(items) => {
            for item in items {
                current_row = render_item(current_row, item, theme, cols);
            }
            current_row
        }
    }
}

fn render_item(row: usize, item: &ReviewItem, theme: &Theme, cols: usize) -> usize {
    if item.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print_line(row, &format!(" [{}] {}  {}", item.status, item.title, item.meta), cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_line(row + 1, &format!("   {}", item.excerpt), cols);
    print!("{}", Theme::reset());
    row + 2
}
