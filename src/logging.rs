//! Logging Setup
//!
//! Installs the rolling logger as the `log` backend, mirroring each record
//! to the browser console.

use log::Level;
use rolling_logger::{LogEntry, RollingLogger};

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};

pub fn init(config: &EditorConfig) -> EditorResult<()> {
    RollingLogger::new(config.log_capacity, config.level_filter())
        .with_sink(console_sink)
        .init()
        .map(|_| ())
        .map_err(|e| EditorError::Unavailable(format!("logger: {}", e)))
}

fn console_sink(entry: &LogEntry) {
    let line: wasm_bindgen::JsValue = entry.format_line().into();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}
