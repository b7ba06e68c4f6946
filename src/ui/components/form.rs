//! Form renderer.
//!
//! Each field takes two rows (label, value) plus a third when it carries a
//! validation error. The focused field is marked with `>`; while editing, a
//! caret follows the value.

use super::banner::render_banner;
use crate::ui::helpers::print_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldInfo, FormView};

/// Renders the form title, banner, fields and submit status.
///
/// Fields that would run past `last_row` are not drawn.
///
/// # Returns
///
/// The next available row position
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print_line(row, &format!(" {}", form.title), cols);
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    if let Some(banner) = &form.banner {
        current_row = render_banner(current_row, banner, theme, cols);
    }
    if form.submitting {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_line(current_row, " Submitting...", cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    for field in &form.fields {
        let height = if field.error.is_some() { 3 } else { 2 };
        if current_row + height > last_row + 1 {
            break;
        }
        current_row = render_field(current_row, field, theme, cols);
    }
    current_row
}

fn render_field(row: usize, field: &FieldInfo, theme: &Theme, cols: usize) -> usize {
    if field.is_focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
        print_line(row, &format!(" > {}", field.label), cols);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_line(row, &format!("   {}", field.label), cols);
    }
    print!("{}", Theme::reset());

    let caret = if field.is_editing { "▏" } else { "" };
    let color = if field.is_placeholder {
        &theme.colors.text_dim
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(color));
    print_line(row + 1, &format!("     {}{caret}", field.text), cols);
    print!("{}", Theme::reset());

    let Some(error) = &field.error else {
        return row + 2;
    };
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print_line(row + 2, &format!("     {error}"), cols);
    print!("{}", Theme::reset());
    row + 3
}
