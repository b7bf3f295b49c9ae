//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette per resolved theme (Latte/Mocha/Dark Blue)
//! - Style helpers derived from the palette

mod colors;
mod styles;

pub use colors::Theme;
