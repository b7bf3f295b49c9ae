//! Application state and update logic for the twin TUI.

use crate::event::Action;
use crate::theme::Theme;
use tracing::debug;
use twin_engine::{ManualSignal, RootClasses, ThemePreference, ThemeStore};

/// TUI state wrapped around an injected [`ThemeStore`].
#[derive(Debug)]
pub struct App {
    /// The theme store driving the preview.
    pub store: ThemeStore,
    /// Handle used to simulate system appearance changes.
    pub signal: ManualSignal,
    /// Class list the store applies resolved themes to.
    pub root: RootClasses,
    /// Highlighted row in the preference list.
    pub selected: usize,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    /// Last notification for the status bar.
    pub notification: Option<String>,
}

impl App {
    /// Create the app. `signal` and `root` should be the same handles the
    /// store was built with.
    pub fn new(store: ThemeStore, signal: ManualSignal, root: RootClasses) -> Self {
        let selected = cycle_index(store.preference());
        Self {
            store,
            signal,
            root,
            selected,
            show_help: false,
            should_quit: false,
            notification: None,
        }
    }

    /// Palette for the currently resolved theme.
    pub fn theme(&self) -> Theme {
        Theme::for_resolved(self.store.resolved())
    }

    /// Preference under the cursor.
    pub fn selected_preference(&self) -> ThemePreference {
        ThemePreference::CYCLE[self.selected]
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Any key closes the help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        let len = ThemePreference::CYCLE.len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Cycle => {
                let next = self.store.cycle_preference();
                self.selected = cycle_index(next);
                self.notify_applied(next);
            }
            Action::Up => self.selected = (self.selected + len - 1) % len,
            Action::Down => self.selected = (self.selected + 1) % len,
            Action::Select => self.apply(self.selected_preference()),
            Action::Choose(index) => {
                if let Some(&preference) = ThemePreference::CYCLE.get(index) {
                    self.selected = index;
                    self.apply(preference);
                }
            }
            Action::ToggleSystem => {
                let appearance = self.signal.toggle();
                debug!(%appearance, "Simulated system appearance change");
                self.notification = Some(format!("System appearance: {appearance}"));
            }
            Action::None => {}
        }
    }

    fn apply(&mut self, preference: ThemePreference) {
        self.store.set_preference(preference);
        self.notify_applied(preference);
    }

    fn notify_applied(&mut self, preference: ThemePreference) {
        self.notification = Some(if self.store.persistence_ok() {
            format!("Theme: {preference}")
        } else {
            format!("Theme: {preference} (not saved)")
        });
    }
}

fn cycle_index(preference: ThemePreference) -> usize {
    ThemePreference::CYCLE
        .iter()
        .position(|&p| p == preference)
        .unwrap_or(0)
}
