//! Event handling module.
//!
//! This module contains the terminal event handler: key input routed to the
//! page state, plus the periodic tick that drives the search debounce.

pub mod terminal;
