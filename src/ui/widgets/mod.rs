//! Reusable UI widget components.
//!
//! This module contains shared styling helpers used by every view.

pub mod styling;
