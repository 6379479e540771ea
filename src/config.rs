//! Editor Configuration
//!
//! Optional settings read from the `window.questionListConfig` JS object.
//! Every field has a default, so a missing or partial object is fine.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};

/// Name of the JS global holding the configuration object
pub const CONFIG_GLOBAL: &str = "questionListConfig";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// localStorage key holding the serialized list
    pub storage_key: String,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    /// Records kept by the in-memory log buffer
    pub log_capacity: usize,
    /// Delay before a deferred focus transfer is flushed
    pub focus_delay_ms: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: "questions".to_string(),
            log_level: "info".to_string(),
            log_capacity: 200,
            focus_delay_ms: 0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `window.questionListConfig`, falling back to defaults
    pub fn from_window() -> Self {
        match Self::try_from_window() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                // logging may not be up yet
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    fn try_from_window() -> EditorResult<Option<Self>> {
        let window = web_sys::window().ok_or_else(|| EditorError::Unavailable("window".to_string()))?;
        let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
            .map_err(|_| EditorError::Unavailable(CONFIG_GLOBAL.to_string()))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| EditorError::Serialization(e.to_string()))
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
