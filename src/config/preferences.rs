// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Accessibility preferences (font scale and high contrast)
//!
//! Both preferences are read once when the page loads and written back on
//! every toggle, under the keys `fontSize` and `highContrast`.
//!
//! Applying a stored value is idempotent: loading the same storage twice
//! yields the same scale and contrast.

use std::fmt;

use crate::config::{ConfigError, Storage};

/// Storage key for the font scale percentage
pub const FONT_SIZE_KEY: &str = "fontSize";

/// Storage key for the high-contrast flag
pub const HIGH_CONTRAST_KEY: &str = "highContrast";

/// Page zoom step
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FontScale {
    /// 100%
    #[default]
    Normal,
    /// 110%
    Large,
    /// 120%
    Larger,
}

impl FontScale {
    /// Zoom percentage
    pub fn percent(self) -> u16 {
        match self {
            FontScale::Normal => 100,
            FontScale::Large => 110,
            FontScale::Larger => 120,
        }
    }

    /// Maps a percentage back to a step
    pub fn from_percent(percent: u16) -> Option<Self> {
        match percent {
            100 => Some(FontScale::Normal),
            110 => Some(FontScale::Large),
            120 => Some(FontScale::Larger),
            _ => None,
        }
    }

    /// Next step in the 100 → 110 → 120 → 100 cycle
    pub fn next(self) -> Self {
        match self {
            FontScale::Normal => FontScale::Large,
            FontScale::Large => FontScale::Larger,
            FontScale::Larger => FontScale::Normal,
        }
    }

    /// Text shown on the font-size button
    pub fn button_label(self) -> &'static str {
        match self {
            FontScale::Normal => "A+",
            FontScale::Large => "A++",
            FontScale::Larger => "A+++",
        }
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Accessibility preferences bound to a storage backend
///
/// Toggles always change the in-memory value. A failed write is reported
/// to the caller but does not roll the toggle back; the page keeps the
/// new look for this session.
#[derive(Debug)]
pub struct AccessibilityPrefs<S: Storage> {
    storage: S,
    font_scale: FontScale,
    high_contrast: bool,
}

/// Reads a stored contrast flag, `None` for anything but `true` or `false`
pub(crate) fn parse_contrast(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl<S: Storage> AccessibilityPrefs<S> {
    /// Loads the stored preferences
    ///
    /// Missing or unreadable values fall back to 100% and normal contrast.
    /// A stored percentage outside the three steps also falls back to 100%,
    /// and a contrast value other than `true` or `false` means off.
    pub fn load(storage: S) -> Self {
        let font_scale = match storage.get_item(FONT_SIZE_KEY) {
            Ok(Some(raw)) => match raw
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(FontScale::from_percent)
            {
                Some(scale) => scale,
                None => {
                    tracing::warn!(value = %raw, "ignoring stored font size");
                    FontScale::default()
                }
            },
            Ok(None) => FontScale::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read font size preference");
                FontScale::default()
            }
        };

        let high_contrast = match storage.get_item(HIGH_CONTRAST_KEY) {
            Ok(Some(raw)) => match parse_contrast(&raw) {
                Some(on) => on,
                None => {
                    tracing::warn!(value = %raw, "ignoring stored contrast setting");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "could not read contrast preference");
                false
            }
        };

        tracing::debug!(%font_scale, high_contrast, "loaded accessibility preferences");

        Self {
            storage,
            font_scale,
            high_contrast,
        }
    }

    /// Current font scale
    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    /// Whether high contrast is on
    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    /// Advances the font scale one step and persists it
    ///
    /// # Returns
    ///
    /// * `Ok(FontScale)` - New scale, stored
    /// * `Err(ConfigError)` - Storage write failed; the new scale is still
    ///   applied in memory
    pub fn cycle_font_scale(&mut self) -> Result<FontScale, ConfigError> {
        self.font_scale = self.font_scale.next();
        self.storage
            .set_item(FONT_SIZE_KEY, &self.font_scale.percent().to_string())?;
        Ok(self.font_scale)
    }

    /// Flips high contrast and persists it
    pub fn toggle_contrast(&mut self) -> Result<bool, ConfigError> {
        self.high_contrast = !self.high_contrast;
        self.storage
            .set_item(HIGH_CONTRAST_KEY, if self.high_contrast { "true" } else { "false" })?;
        Ok(self.high_contrast)
    }

    /// Borrows the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Gives the storage backend back (e.g. to reload from it)
    pub fn into_storage(self) -> S {
        self.storage
    }
}
