//! Color palettes for the TUI, one per resolved theme.

use ratatui::style::Color;
use twin_engine::ResolvedTheme;

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,

    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::latte()
    }
}

impl Theme {
    /// Palette painted for a resolved theme.
    pub fn for_resolved(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::latte(),
            ResolvedTheme::Dark => Self::mocha(),
            ResolvedTheme::DarkBlue => Self::dark_blue(),
        }
    }

    /// Catppuccin Latte theme (light).
    pub fn latte() -> Self {
        Self {
            name: "Latte",

            // Backgrounds
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            // Foregrounds
            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            // Accents
            primary: Color::Rgb(114, 135, 253),  // #7287fd (lavender)
            secondary: Color::Rgb(23, 146, 153), // #179299 (teal)

            // Semantic
            success: Color::Rgb(64, 160, 43),  // #40a02b
            warning: Color::Rgb(223, 142, 29), // #df8e1d
            error: Color::Rgb(210, 15, 57),    // #d20f39
            info: Color::Rgb(30, 102, 245),    // #1e66f5

            // Borders
            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// Catppuccin Mocha theme (dark).
    pub fn mocha() -> Self {
        Self {
            name: "Mocha",

            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244
            overlay: Color::Rgb(69, 71, 90), // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)

            success: Color::Rgb(166, 227, 161), // #a6e3a1
            warning: Color::Rgb(249, 226, 175), // #f9e2af
            error: Color::Rgb(243, 139, 168),   // #f38ba8
            info: Color::Rgb(137, 180, 250),    // #89b4fa

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Navy dark theme.
    pub fn dark_blue() -> Self {
        Self {
            name: "Dark Blue",

            base: Color::Rgb(11, 26, 51),     // #0b1a33
            surface: Color::Rgb(19, 40, 77),  // #13284d
            overlay: Color::Rgb(29, 55, 102), // #1d3766

            text: Color::Rgb(214, 228, 255),    // #d6e4ff
            subtext: Color::Rgb(169, 189, 230), // #a9bde6
            muted: Color::Rgb(107, 130, 179),   // #6b82b3

            primary: Color::Rgb(94, 168, 255),    // #5ea8ff
            secondary: Color::Rgb(126, 224, 230), // #7ee0e6

            success: Color::Rgb(139, 212, 156), // #8bd49c
            warning: Color::Rgb(242, 205, 125), // #f2cd7d
            error: Color::Rgb(240, 139, 160),   // #f08ba0
            info: Color::Rgb(111, 179, 255),    // #6fb3ff

            border: Color::Rgb(29, 55, 102),          // #1d3766
            border_focused: Color::Rgb(94, 168, 255), // #5ea8ff
        }
    }

    /// Named colors shown in the preview swatch strip.
    pub fn swatches(&self) -> [(&'static str, Color); 8] {
        [
            ("base", self.base),
            ("surface", self.surface),
            ("text", self.text),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }
}
