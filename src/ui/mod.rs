//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Page layout (filter bar, result bar, project list, detail card)
//! - Theme management
//! - Shared styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
