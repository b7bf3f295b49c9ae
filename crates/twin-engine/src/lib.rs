//! twin-engine: theme preference resolution and persistence
//!
//! This crate provides the appearance core of twin, including:
//! - Theme preference and resolved theme types
//! - Durable preference storage
//! - The system appearance signal and its subscriptions
//! - The theme store tying them together
//! - Configuration

pub mod config;
pub mod signal;
pub mod storage;
pub mod store;
pub mod target;
pub mod theme;

// Re-export commonly used types
pub use config::{Config, ConfigError, MIN_TICK_RATE_MS};
pub use signal::{
    appearance_from_colorfgbg, detect_appearance, AppearanceListener, AppearanceSignal,
    ManualSignal, Subscription,
};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, StorageError};
pub use store::{ThemeStore, DEFAULT_STORAGE_KEY};
pub use target::{RootClasses, ThemeTarget};
pub use theme::{resolve, Appearance, ResolvedTheme, ThemeError, ThemePreference};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
