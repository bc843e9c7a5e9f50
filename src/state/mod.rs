//! Application state management module.
//!
//! This module contains the page-level state of the application:
//! - Main `State` struct owning the filter store and filter bar controller
//! - Navigation types (View, Focus)

mod navigation;
mod state_impl;

pub use navigation::{Focus, View};
pub use state_impl::State;
