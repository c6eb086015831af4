//! Console Logger
//!
//! Level parsing and installation for the browser console backend. On
//! wasm32 records go through `wasm_logger`, which routes each level to the
//! matching console method. Off wasm32 nothing is installed and records are
//! dropped.

use log::{Level, LevelFilter};
use thiserror::Error;

/// Errors raised while configuring the logger
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::UnknownLevel(name.to_string()))
}

/// Most verbose level the console shows, `None` when logging is off
pub fn console_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

/// Install the console backend for records whose target starts with
/// `module_prefix`, e.g. `projectdesk_ui`.
pub fn init(module_prefix: &str, filter: LevelFilter) {
    log::set_max_level(filter);
    let Some(level) = console_level(filter) else {
        return;
    };
    install(module_prefix, level);
}

#[cfg(target_arch = "wasm32")]
fn install(module_prefix: &str, level: Level) {
    wasm_logger::init(wasm_logger::Config::new(level).module_prefix(module_prefix));
}

#[cfg(not(target_arch = "wasm32"))]
fn install(_module_prefix: &str, _level: Level) {}
