//! Theme data model and resolution.
//!
//! A [`ThemePreference`] is what the user asked for, a [`ResolvedTheme`] is
//! what gets painted. The two only differ when the preference is `auto`,
//! in which case the host [`Appearance`] decides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's stored theme intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    DarkBlue,
    /// Follow the host appearance.
    Auto,
}

impl ThemePreference {
    /// Cycle order used by [`ThemePreference::next`].
    pub const CYCLE: [Self; 4] = [Self::Light, Self::Dark, Self::DarkBlue, Self::Auto];

    /// The next preference in cycle order, wrapping from `auto` to `light`.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::DarkBlue,
            Self::DarkBlue => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::DarkBlue => "dark-blue",
            Self::Auto => "auto",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::DarkBlue => "Dark Blue",
            Self::Auto => "Auto (follow system)",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "dark-blue" => Ok(Self::DarkBlue),
            "auto" => Ok(Self::Auto),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

/// The concrete theme applied to the interface. Never `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
    DarkBlue,
}

impl ResolvedTheme {
    /// Every resolved theme, used when clearing render-root classes.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::DarkBlue];

    /// Identifier tagged onto the visual root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::DarkBlue => "dark-blue",
        }
    }

    /// Whether the theme uses a dark background.
    pub fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Host light/dark appearance, as reported by the system signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// The opposite appearance.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Appearance {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidAppearance(other.to_string())),
        }
    }
}

/// Resolve a preference against the host appearance.
///
/// `auto` only ever yields `light` or `dark`; `dark-blue` is reachable
/// through direct selection alone.
pub fn resolve(preference: ThemePreference, appearance: Appearance) -> ResolvedTheme {
    match preference {
        ThemePreference::Auto => match appearance {
            Appearance::Dark => ResolvedTheme::Dark,
            Appearance::Light => ResolvedTheme::Light,
        },
        ThemePreference::DarkBlue => ResolvedTheme::DarkBlue,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::Light => ResolvedTheme::Light,
    }
}

/// Errors for theme values crossing an untyped boundary.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Not one of `light`, `dark`, `dark-blue`, `auto`.
    #[error("Invalid theme preference: {0:?} (expected light, dark, dark-blue or auto)")]
    InvalidPreference(String),

    /// Not one of `light`, `dark`.
    #[error("Invalid system appearance: {0:?} (expected light or dark)")]
    InvalidAppearance(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_cycle_order_wraps() {
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::DarkBlue);
        assert_eq!(ThemePreference::DarkBlue.next(), ThemePreference::Auto);
        assert_eq!(ThemePreference::Auto.next(), ThemePreference::Light);
    }

    #[test]
    fn test_cycle_closes_after_four_steps() {
        for start in ThemePreference::CYCLE {
            let end = (0..4).fold(start, |p, _| p.next());
            assert_eq!(end, start);
        }
    }

    #[test]
    fn test_cycle_const_matches_next() {
        for pair in ThemePreference::CYCLE.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!(
            "dark-blue".parse::<ThemePreference>().unwrap(),
            ThemePreference::DarkBlue
        );
        assert_eq!("auto".parse::<ThemePreference>().unwrap(), ThemePreference::Auto);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        for raw in ["", "Dark", "dark_blue", "system", " light"] {
            let result = raw.parse::<ThemePreference>();
            assert!(
                matches!(result, Err(ThemeError::InvalidPreference(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for pref in ThemePreference::CYCLE {
            assert_eq!(pref.to_string().parse::<ThemePreference>().unwrap(), pref);
        }
    }

    #[test]
    fn test_serde_uses_stored_strings() {
        let json = serde_json::to_string(&ThemePreference::DarkBlue).unwrap();
        assert_eq!(json, "\"dark-blue\"");
        let parsed: ThemePreference = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, ThemePreference::Auto);
    }

    #[test]
    fn test_resolve_auto_follows_appearance() {
        assert_eq!(
            resolve(ThemePreference::Auto, Appearance::Dark),
            ResolvedTheme::Dark
        );
        assert_eq!(
            resolve(ThemePreference::Auto, Appearance::Light),
            ResolvedTheme::Light
        );
    }

    #[test]
    fn test_resolve_explicit_ignores_appearance() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_eq!(
                resolve(ThemePreference::DarkBlue, appearance),
                ResolvedTheme::DarkBlue
            );
            assert_eq!(resolve(ThemePreference::Dark, appearance), ResolvedTheme::Dark);
            assert_eq!(resolve(ThemePreference::Light, appearance), ResolvedTheme::Light);
        }
    }

    #[test]
    fn test_auto_never_resolves_to_dark_blue() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_ne!(
                resolve(ThemePreference::Auto, appearance),
                ResolvedTheme::DarkBlue
            );
        }
    }

    #[test]
    fn test_appearance_parse_and_toggle() {
        assert_eq!("Dark".parse::<Appearance>().unwrap(), Appearance::Dark);
        assert_eq!(" light ".parse::<Appearance>().unwrap(), Appearance::Light);
        assert!("dim".parse::<Appearance>().is_err());
        assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ResolvedTheme::DarkBlue.class_name(), "dark-blue");
        assert!(ResolvedTheme::DarkBlue.is_dark());
        assert!(!ResolvedTheme::Light.is_dark());
    }
}
