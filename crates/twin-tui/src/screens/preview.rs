//! Theme preview screen.
//!
//! Left: the four preferences, with the cursor and the active one marked.
//! Right: what the store resolved, why, and a swatch strip of the palette.

use crate::app::App;
use crate::screens::Screen;
use crate::theme::Theme;
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{main_layout, preview_columns};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use twin_engine::ThemePreference;

/// The preview screen.
pub struct PreviewScreen;

impl Screen for PreviewScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let theme = app.theme();
        let (main_area, status_area) = main_layout(area);
        let (list_area, detail_area) = preview_columns(main_area);

        render_preferences(app, &theme, list_area, buf);
        render_details(app, &theme, detail_area, buf);

        let hints = vec![
            KeyHint::new("t", "Cycle"),
            KeyHint::new("↵", "Apply"),
            KeyHint::new("s", "System"),
            KeyHint::new("?", "Help"),
            KeyHint::new("q", "Quit"),
        ];
        let mode = app.store.resolved().class_name();
        let mut status_bar = StatusBar::new(mode, &theme).hints(hints);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        }
        status_bar.render(status_area, buf);
    }
}

fn render_preferences(app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Preference ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_active())
        .style(theme.style());

    let current = app.store.preference();
    let lines: Vec<Line<'_>> = ThemePreference::CYCLE
        .iter()
        .enumerate()
        .map(|(i, &preference)| {
            let cursor = if i == app.selected { "›" } else { " " };
            let marker = if preference == current { "●" } else { "○" };
            let style = if i == app.selected {
                theme.highlight()
            } else {
                theme.style()
            };
            Line::from(vec![
                Span::styled(format!(" {cursor} {marker} "), style),
                Span::styled(format!("{} ", i + 1), theme.dim()),
                Span::styled(preference.label(), style),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(block)
        .style(theme.style())
        .render(area, buf);
}

fn render_details(app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(format!(" {} ", theme.name))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.style());

    let store = &app.store;
    let following = if store.is_following_system() {
        Span::styled("yes", theme.success_style())
    } else {
        Span::styled("no", theme.dim())
    };
    let storage = if store.persistence_ok() {
        Span::styled("[ok] saved", theme.success_style())
    } else {
        Span::styled("[!] write failed, session only", theme.warning_style())
    };

    let mut lines = vec![
        Line::from(""),
        field_line(theme, "Preference", Span::styled(store.preference().to_string(), theme.style())),
        field_line(theme, "Resolved", Span::styled(store.resolved().to_string(), theme.highlight())),
        field_line(theme, "System", Span::styled(store.system_appearance().to_string(), theme.style())),
        field_line(theme, "Following", following),
        field_line(theme, "Root classes", Span::styled(app.root.classes().join(" "), theme.style())),
        field_line(theme, "Storage", storage),
        Line::from(""),
    ];

    for pair in theme.swatches().chunks(4) {
        let mut spans = vec![Span::raw("  ")];
        for (name, color) in pair {
            spans.push(Span::styled("██", Style::default().fg(*color).bg(theme.base)));
            spans.push(Span::styled(format!(" {name:<8}"), theme.dim()));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines)
        .block(block)
        .style(theme.style())
        .render(area, buf);
}

fn field_line<'a>(theme: &Theme, label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<13}"), theme.dim()),
        value,
    ])
}
