//! Logging setup.
//!
//! Records go through the `log` facade into `tui-logger`, which keeps them for
//! the log panel.

use crate::error::AppError;
use log::LevelFilter;
use tui_logger::{init_logger, set_default_level};

/// Install the global logger at the given maximum level.
///
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    init_logger(level).map_err(|e| AppError::Logger(e.to_string()))?;
    set_default_level(level);
    Ok(())
}
