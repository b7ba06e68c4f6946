//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents: two are embedded in the binary and any other
//! can be loaded from a file named by the `theme_file` plugin option.
//!
//! # Built-in Themes
//!
//! - `saffron-night`: Dark theme with spice-market ambers (default)
//! - `olive-grove`: Light theme with Mediterranean greens
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f4c27a"
//! selection_fg = "#1c1917"
//! selection_bg = "#f59e0b"
//! text_normal = "#e7e5e4"
//! text_dim = "#78716c"
//! border = "#44403c"
//! search_bar_border = "#f59e0b"
//! match_highlight_fg = "#1c1917"
//! match_highlight_bg = "#fcd34d"
//! empty_state_fg = "#fb923c"
//! accent = "#ea580c"
//! error_fg = "#f87171"
//! success_fg = "#86efac"
//! ```
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::ui::theme::Theme;
//!
//! let theme = Theme::from_name("olive-grove").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::{CuisineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "saffron-night";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#f4c27a"). `header_bg` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Active tab, section headings and the featured marker.
    pub accent: String,
    /// Validation and submission errors.
    pub error_fg: String,
    /// Success banners.
    pub success_fg: String,
}

impl Theme {
    /// Looks up an embedded theme. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "saffron-night" => include_str!("../../themes/saffron-night.toml"),
            "olive-grove" => include_str!("../../themes/olive-grove.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CuisineError::Io`] if the file cannot be read and
    /// [`CuisineError::Theme`] if it is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| CuisineError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`. Anything else renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let value = if digits.len() == 6 {
            u32::from_str_radix(digits, 16).unwrap_or(0x00ff_ffff)
        } else {
            0x00ff_ffff
        };
        let [_, r, g, b] = value.to_be_bytes();
        (r, g, b)
    }

    /// 24-bit SGR color sequence; `layer` is 38 for foreground, 48 for background.
    fn color(layer: u8, hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[{layer};2;{r};{g};{b}m")
    }

    /// Foreground color escape sequence.
    ///
    /// ```rust
    /// use world_cuisines::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::color(38, hex)
    }

    /// Background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::color(48, hex)
    }

    /// Bold on.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Faint text.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all attributes.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Saffron Night.
    ///
    /// # Panics
    ///
    /// Never in practice: the embedded document is parsed by the tests.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in saffron-night theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["saffron-night", "olive-grove"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn theme_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = toml::to_string(&Theme::default()).unwrap();
        file.write_all(text.as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), Theme::default());
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(CuisineError::Theme(_))));
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }
}
