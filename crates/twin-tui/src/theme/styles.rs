//! Common styles derived from a [`Theme`].

use ratatui::style::{Modifier, Style};

use super::Theme;

impl Theme {
    /// Default text style.
    pub fn style(&self) -> Style {
        Style::default().fg(self.text).bg(self.base)
    }

    /// Dimmed text for secondary information.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).bg(self.base)
    }

    /// Highlighted/selected item.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).bg(self.base)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning).bg(self.base)
    }

    /// Key hint style (for status bar).
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.base)
            .bg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style.
    pub fn key_label(&self) -> Style {
        Style::default().fg(self.subtext).bg(self.surface)
    }

    /// Status bar background style.
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Border style for inactive elements.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style for focused elements.
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.border_focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_palette() {
        let theme = Theme::dark_blue();
        assert_eq!(theme.style().bg, Some(theme.base));
        assert_eq!(theme.dim().fg, Some(theme.muted));
        assert_eq!(theme.border_active().fg, Some(theme.border_focused));
    }
}
