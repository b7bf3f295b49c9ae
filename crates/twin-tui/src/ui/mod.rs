//! UI helpers for the twin TUI.

pub mod layout;
pub mod widgets;

pub use layout::*;
