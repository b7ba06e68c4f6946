//! Cuisine detail renderer.

use crate::ui::helpers::print_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, DetailLine};

/// Renders the title, subtitle and the visible slice of body lines.
///
/// # Returns
///
/// The next available row position
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print_line(row, &format!(" {}", detail.title), cols);
    print!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_dim));
    print_line(row + 1, &format!(" {}", detail.subtitle), cols);
    print!("{}", Theme::reset());

    let mut current_row = row + 3;
    for line in &detail.lines {
        match line {
            DetailLine::Heading(text) => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
                print_line(current_row, &format!(" {text}"), cols);
            }
            DetailLine::Text(text) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print_line(current_row, &format!("  {text}"), cols);
            }
            DetailLine::Bullet(text) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print_line(current_row, &format!("  • {text}"), cols);
            }
            DetailLine::Blank => print_line(current_row, "", cols),
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
