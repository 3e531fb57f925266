//! Centralized theme and color scheme for the TUI.
//!
//! Every panel pulls its colors from [`colors()`], so switching theme at
//! runtime restyles the whole report on the next frame.

use crate::model::ColorClass;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the report screen.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Report color classes
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
    pub orange: Color,
    pub red: Color,
    pub gray: Color,

    // UI elements
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub warning: Color,

    // Badge foregrounds
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            green: Color::Green,
            blue: Color::Blue,
            yellow: Color::Yellow,
            orange: Color::Rgb(255, 140, 0),
            red: Color::Red,
            gray: Color::DarkGray,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            warning: Color::Yellow,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            green: Color::Rgb(0, 128, 0),
            blue: Color::Rgb(0, 0, 200),
            yellow: Color::Rgb(180, 140, 0),
            orange: Color::Rgb(200, 100, 0),
            red: Color::Rgb(200, 0, 0),
            gray: Color::Rgb(100, 100, 100),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 100, 0),
            muted: Color::Rgb(120, 120, 120),
            border: Color::Rgb(150, 150, 150),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(235, 235, 240),
            text: Color::Black,
            text_muted: Color::Rgb(80, 80, 80),
            selection: Color::Rgb(200, 210, 230),
            warning: Color::Rgb(180, 140, 0),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            green: Color::LightGreen,
            blue: Color::LightBlue,
            yellow: Color::LightYellow,
            orange: Color::Rgb(255, 170, 60),
            red: Color::LightRed,
            gray: Color::Gray,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(80, 80, 80),
            warning: Color::LightYellow,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Terminal color for a report color class.
    #[must_use]
    pub const fn class(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Green => self.green,
            ColorClass::Blue => self.blue,
            ColorClass::Yellow => self.yellow,
            ColorClass::Orange => self.orange,
            ColorClass::Red => self.red,
            ColorClass::Gray => self.gray,
        }
    }

    /// Foreground for text drawn on a class-colored badge.
    #[must_use]
    pub const fn badge_fg(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Red | ColorClass::Blue | ColorClass::Gray => self.badge_fg_light,
            ColorClass::Green | ColorClass::Yellow | ColorClass::Orange => self.badge_fg_dark,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Look up a theme by name; unknown names fall back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Foreground style for a report color class.
    pub fn class(class: ColorClass) -> Style {
        Style::default().fg(colors().class(class))
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

pub struct FooterHints;

impl FooterHints {
    /// Hints shown under the report
    pub fn report() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-5", "filter"),
            ("Tab/←→", "cycle filter"),
            ("↑↓/jk", "select issue"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::text_muted()));
        }
        spans.push(Span::styled((*key).to_string(), Styles::shortcut_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
    }

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("LIGHT").name, "light");
        assert_eq!(Theme::from_name("hc").name, "high-contrast");
        assert_eq!(Theme::from_name("solarized").name, "dark");
    }

    #[test]
    fn test_class_mapping_is_distinct_for_severities() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.class(ColorClass::Red), Color::Red);
        assert_eq!(scheme.class(ColorClass::Green), Color::Green);
        assert_ne!(
            scheme.class(ColorClass::Orange),
            scheme.class(ColorClass::Yellow)
        );
    }

    #[test]
    fn test_footer_hints_separated() {
        let spans = render_footer_hints(&[("q", "quit"), ("t", "theme")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[2].content, " │ ");
    }
}
