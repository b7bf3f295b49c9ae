//! Test utilities for twin-tui rendering tests.
//!
//! Helpers for building isolated apps over in-memory storage and for
//! turning rendered buffers into plain strings.

use crate::app::App;
use crate::screens::Screen;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use std::rc::Rc;
use twin_engine::{
    Appearance, ManualSignal, MemoryStorage, RootClasses, ThemeStore, DEFAULT_STORAGE_KEY,
};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create an app over in-memory storage.
///
/// `stored` is the raw persisted preference, `None` for a first run.
pub fn create_test_app(stored: Option<&str>, appearance: Appearance) -> App {
    let storage = match stored {
        Some(raw) => MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, raw),
        None => MemoryStorage::new(),
    };
    let signal = ManualSignal::new(appearance);
    let root = RootClasses::new();
    let store = ThemeStore::new(
        Box::new(storage),
        Rc::new(signal.clone()),
        Rc::new(root.clone()),
    );
    App::new(store, signal, root)
}

/// Convert a buffer to a string, one line per row with trailing spaces trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: Screen>(screen: &S, app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::preview::PreviewScreen;
    use twin_engine::ThemePreference;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app_reads_stored_value() {
        let app = create_test_app(Some("dark"), Appearance::Light);
        assert_eq!(app.store.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }

    #[test]
    fn test_draw_through_terminal() {
        let app = create_test_app(None, Appearance::Light);
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                PreviewScreen.render(&app, area, frame.buffer_mut());
            })
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Latte"));
    }
}
