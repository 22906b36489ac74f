//! Timing and threshold settings
//!
//! Every delay the page uses comes from here so tests and the CLI can
//! shorten or lengthen them. All fields have defaults; a settings file only
//! needs the values it overrides.
//!
//! ```toml
//! slide_interval_ms = 8000
//! search_debounce_ms = 150
//! ```

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::config::{storage::expand_path, ConfigError};

/// Default location of the preference storage file
pub const DEFAULT_STORAGE_PATH: &str = "~/.config/portal-widgets/storage.toml";

/// Page timings and thresholds
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Hero slider autoplay interval
    pub slide_interval_ms: u64,
    /// Delay before a dropdown closes after the pointer leaves
    pub dropdown_hide_delay_ms: u64,
    /// Quiet period before a catalog search runs
    pub search_debounce_ms: u64,
    /// Simulated network latency of the contact form
    pub submit_delay_ms: u64,
    /// Delay before a new overlay becomes fully shown
    pub modal_fade_in_ms: u64,
    /// Fade-out length before an overlay is removed
    pub modal_fade_out_ms: u64,
    /// Minimum chat reply delay
    pub chat_reply_min_ms: u64,
    /// Random extra chat reply delay (upper bound)
    pub chat_reply_jitter_ms: u64,
    /// Scroll offset past which the navbar switches style
    pub navbar_scroll_threshold: u32,
    /// Scroll offset past which the back-to-top button shows
    pub back_to_top_threshold: u32,
    /// Characters needed before the search box suggests anything
    pub suggestion_min_chars: usize,
    /// Preference storage file
    pub storage_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slide_interval_ms: 5000,
            dropdown_hide_delay_ms: 150,
            search_debounce_ms: 300,
            submit_delay_ms: 2000,
            modal_fade_in_ms: 10,
            modal_fade_out_ms: 300,
            chat_reply_min_ms: 1000,
            chat_reply_jitter_ms: 2000,
            navbar_scroll_threshold: 100,
            back_to_top_threshold: 300,
            suggestion_min_chars: 2,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file is not valid settings TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse { path, message })
    }

    /// Parses settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    pub fn dropdown_hide_delay(&self) -> Duration {
        Duration::from_millis(self.dropdown_hide_delay_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn modal_fade_in(&self) -> Duration {
        Duration::from_millis(self.modal_fade_in_ms)
    }

    pub fn modal_fade_out(&self) -> Duration {
        Duration::from_millis(self.modal_fade_out_ms)
    }

    pub fn chat_reply_min(&self) -> Duration {
        Duration::from_millis(self.chat_reply_min_ms)
    }

    pub fn chat_reply_jitter(&self) -> Duration {
        Duration::from_millis(self.chat_reply_jitter_ms)
    }
}
