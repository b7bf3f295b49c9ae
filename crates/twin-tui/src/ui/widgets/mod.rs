//! Reusable widgets for the twin TUI.

pub mod status_bar;

pub use status_bar::{KeyHint, StatusBar};
