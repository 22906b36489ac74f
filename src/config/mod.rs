//! Settings and preference persistence.
//!
//! This module owns everything the page reads from or writes to disk:
//!
//! - **Settings**: timings and thresholds from an optional TOML file
//! - **Storage**: a local-storage style string key/value store
//! - **Preferences**: the accessibility flags kept in that store
//!
//! # Example
//!
//! ```no_run
//! use portal_widgets::config::{AccessibilityPrefs, FileStorage, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::load(Path::new("portal.toml"))?;
//! let storage = FileStorage::open(&settings.storage_path)?;
//!
//! let mut prefs = AccessibilityPrefs::load(storage);
//! let scale = prefs.cycle_font_scale()?;
//! println!("Font scale is now {}", scale);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod preferences;
pub mod settings;
pub mod storage;

pub use error::ConfigError;
pub use preferences::{AccessibilityPrefs, FontScale};
pub use settings::Settings;
pub use storage::{FileStorage, MemoryStorage, Storage};

#[cfg(test)]
mod tests;
