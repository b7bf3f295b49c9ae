//! Screen definitions for the twin TUI.

pub mod preview;

use crate::app::App;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    use crate::ui::centered_fixed;
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let help_text = r"
  Appearance
    t                 Cycle light/dark/dark-blue/auto
    1-4               Choose a preference directly
    j/k or Up/Down    Move selection
    Enter             Apply selection
    s                 Flip system appearance
    q / Esc           Quit
    ?                 Toggle this help

  [Press any key to close]
";

    let width = 52.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_active())
        .style(theme.style());

    Paragraph::new(help_text)
        .block(block)
        .style(theme.style())
        .render(overlay_area, buf);
}
