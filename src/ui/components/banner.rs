//! Result banner renderer.

use crate::ui::helpers::print_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Renders a one-line success or error banner.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_banner(row: usize, banner: &BannerInfo, theme: &Theme, cols: usize) -> usize {
    let (color, marker) = if banner.is_error {
        (&theme.colors.error_fg, "✗")
    } else {
        (&theme.colors.success_fg, "✓")
    };

    print!("{}{}", Theme::bold(), Theme::fg(color));
    print_line(row, &format!(" {marker} {}  (Enter: dismiss)", banner.message), cols);
    print!("{}", Theme::reset());
    row + 1
}
