//! twin-tui: terminal preview of the twin appearance layer
//!
//! This crate renders the theme store the way the product's views see it:
//! - Palettes for each resolved theme
//! - A preview screen for choosing and cycling preferences
//! - A simulated system appearance switch for exercising `auto`

mod app;
mod event;
pub mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
mod ui;

use screens::Screen as _;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use theme::Theme;
pub use twin_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::Path;
use std::rc::Rc;
use tracing::info;
use twin_engine::{Config, FileStorage, ManualSignal, RootClasses, ThemeStore};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Class the preview root carries alongside the theme class.
pub const ROOT_CLASS: &str = "twin-preview";

/// Build the app for `data_dir`: file-backed store, system signal seeded
/// from the config override or the environment, and a root tagged with
/// [`ROOT_CLASS`].
pub fn build_app(data_dir: &Path, config: &Config) -> App {
    let signal = config
        .system_appearance
        .map_or_else(ManualSignal::detect, ManualSignal::new);
    let root = RootClasses::new();
    root.add(ROOT_CLASS);
    let storage = FileStorage::new(config.storage_path(data_dir));

    let store = ThemeStore::with_key(
        &config.storage_key,
        Box::new(storage),
        Rc::new(signal.clone()),
        Rc::new(root.clone()),
    );
    App::new(store, signal, root)
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// on exit.
pub async fn run_tui(data_dir: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = build_app(data_dir, config);
    info!(
        preference = %app.store.preference(),
        resolved = %app.store.resolved(),
        "Starting preview"
    );

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(config.tick_rate_ms());

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            screens::preview::PreviewScreen.render(app, area, buf);

            if app.show_help {
                screens::render_help_overlay(&app.theme(), area, buf);
            }
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_action(key_to_action(key)),
            Some(Event::Tick | Event::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    info!(preference = %app.store.preference(), "Preview closed");
    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use twin_engine::{Appearance, ResolvedTheme, ThemePreference};

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_build_app_uses_config_override() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            system_appearance: Some(Appearance::Dark),
            ..Config::default()
        };
        std::fs::write(
            config.storage_path(temp.path()),
            r#"{"theme": "auto"}"#,
        )
        .unwrap();

        let app = build_app(temp.path(), &config);
        assert_eq!(app.store.preference(), ThemePreference::Auto);
        assert_eq!(app.store.resolved(), ResolvedTheme::Dark);
        assert_eq!(app.root.active_theme(), Some(ResolvedTheme::Dark));
    }

    #[test]
    fn test_build_app_root_keeps_host_class() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            system_appearance: Some(Appearance::Dark),
            ..Config::default()
        };

        let mut app = build_app(temp.path(), &config);
        assert_eq!(app.root.classes(), vec!["light".to_string(), ROOT_CLASS.to_string()]);

        app.handle_action(Action::Cycle);
        app.handle_action(Action::Cycle);
        assert!(app.root.contains(ROOT_CLASS));
        assert_eq!(app.root.active_theme(), Some(ResolvedTheme::DarkBlue));
        assert_eq!(app.root.theme_class_count(), 1);
    }

    #[test]
    fn test_build_app_persists_to_data_dir() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            system_appearance: Some(Appearance::Light),
            ..Config::default()
        };

        let mut app = build_app(temp.path(), &config);
        app.handle_action(Action::Cycle);
        drop(app);

        let app = build_app(temp.path(), &config);
        assert_eq!(app.store.preference(), ThemePreference::Dark);
    }
}
