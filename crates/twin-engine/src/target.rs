//! Render targets for resolved themes.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::theme::ResolvedTheme;

/// Receives the resolved theme whenever it is (re)applied.
pub trait ThemeTarget {
    fn apply(&self, theme: ResolvedTheme);
}

/// Class list of the visual root.
///
/// Applying a theme clears every theme class before adding the new one,
/// so at most one is ever present. Other classes are left alone.
#[derive(Debug, Clone, Default)]
pub struct RootClasses {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl RootClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-theme class.
    pub fn add(&self, class: impl Into<String>) {
        self.classes.borrow_mut().insert(class.into());
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// All classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// The theme class currently applied, if any.
    pub fn active_theme(&self) -> Option<ResolvedTheme> {
        let classes = self.classes.borrow();
        ResolvedTheme::ALL
            .into_iter()
            .find(|theme| classes.contains(theme.class_name()))
    }

    /// Number of theme classes present. Always 0 or 1.
    pub fn theme_class_count(&self) -> usize {
        let classes = self.classes.borrow();
        ResolvedTheme::ALL
            .iter()
            .filter(|theme| classes.contains(theme.class_name()))
            .count()
    }
}

impl ThemeTarget for RootClasses {
    fn apply(&self, theme: ResolvedTheme) {
        let mut classes = self.classes.borrow_mut();
        for stale in ResolvedTheme::ALL {
            classes.remove(stale.class_name());
        }
        classes.insert(theme.class_name().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_has_no_theme() {
        let root = RootClasses::new();
        assert_eq!(root.active_theme(), None);
        assert_eq!(root.theme_class_count(), 0);
    }

    #[test]
    fn test_apply_replaces_previous_theme() {
        let root = RootClasses::new();
        root.apply(ResolvedTheme::Dark);
        root.apply(ResolvedTheme::DarkBlue);

        assert_eq!(root.active_theme(), Some(ResolvedTheme::DarkBlue));
        assert_eq!(root.theme_class_count(), 1);
        assert!(!root.contains("dark"));
    }

    #[test]
    fn test_apply_keeps_unrelated_classes() {
        let root = RootClasses::new();
        root.add("compact");
        root.apply(ResolvedTheme::Light);
        root.apply(ResolvedTheme::Dark);

        assert_eq!(root.classes(), vec!["compact".to_string(), "dark".to_string()]);
    }

    #[test]
    fn test_clones_share_class_list() {
        let root = RootClasses::new();
        let view = root.clone();
        root.apply(ResolvedTheme::Light);
        assert_eq!(view.active_theme(), Some(ResolvedTheme::Light));
    }
}
