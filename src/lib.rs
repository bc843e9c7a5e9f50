//! Terminal listing page for a catalog of projects: filter bar, debounced
//! search, location sync and result cards.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod logger;
pub mod state;
pub mod ui;
