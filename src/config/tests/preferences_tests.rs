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

use tempfile::TempDir;

use crate::config::{
    preferences::{parse_contrast, FONT_SIZE_KEY, HIGH_CONTRAST_KEY},
    AccessibilityPrefs, ConfigError, FileStorage, FontScale, MemoryStorage, Storage,
};

/// Storage whose writes always fail
#[derive(Default)]
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::WriteFailed("read-only".to_string()))
    }
}

#[test]
fn test_defaults_without_stored_values() {
    let prefs = AccessibilityPrefs::load(MemoryStorage::new());

    assert_eq!(prefs.font_scale(), FontScale::Normal);
    assert!(!prefs.high_contrast());
}

#[test]
fn test_font_scale_cycles_through_three_steps() {
    let mut prefs = AccessibilityPrefs::load(MemoryStorage::new());

    let seen: Vec<u16> = (0..4)
        .map(|_| prefs.cycle_font_scale().unwrap().percent())
        .collect();

    assert_eq!(seen, vec![110, 120, 100, 110]);
}

#[test]
fn test_button_labels() {
    assert_eq!(FontScale::Normal.button_label(), "A+");
    assert_eq!(FontScale::Large.button_label(), "A++");
    assert_eq!(FontScale::Larger.button_label(), "A+++");
}

#[test]
fn test_toggles_are_persisted() {
    let mut prefs = AccessibilityPrefs::load(MemoryStorage::new());
    prefs.cycle_font_scale().unwrap();
    prefs.toggle_contrast().unwrap();

    let storage = prefs.into_storage();
    assert_eq!(storage.get_item(FONT_SIZE_KEY).unwrap(), Some("110".to_string()));
    assert_eq!(
        storage.get_item(HIGH_CONTRAST_KEY).unwrap(),
        Some("true".to_string())
    );
}

#[test]
fn test_reload_reproduces_scale() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.toml");

    let mut prefs = AccessibilityPrefs::load(FileStorage::open(&path).unwrap());
    prefs.cycle_font_scale().unwrap();
    prefs.cycle_font_scale().unwrap();
    prefs.toggle_contrast().unwrap();

    let reloaded = AccessibilityPrefs::load(FileStorage::open(&path).unwrap());
    assert_eq!(reloaded.font_scale(), FontScale::Larger);
    assert!(reloaded.high_contrast());

    // Loading again is idempotent
    let again = AccessibilityPrefs::load(FileStorage::open(&path).unwrap());
    assert_eq!(again.font_scale(), reloaded.font_scale());
    assert_eq!(again.high_contrast(), reloaded.high_contrast());
}

#[test]
fn test_contrast_toggles_back() {
    let mut prefs = AccessibilityPrefs::load(MemoryStorage::new());
    assert!(prefs.toggle_contrast().unwrap());
    assert!(!prefs.toggle_contrast().unwrap());
    assert_eq!(
        prefs.storage().get_item(HIGH_CONTRAST_KEY).unwrap(),
        Some("false".to_string())
    );
}

#[test]
fn test_unknown_stored_values_fall_back() {
    let mut storage = MemoryStorage::new();
    storage.set_item(FONT_SIZE_KEY, "135").unwrap();
    storage.set_item(HIGH_CONTRAST_KEY, "yes").unwrap();

    let prefs = AccessibilityPrefs::load(storage);
    assert_eq!(prefs.font_scale(), FontScale::Normal);
    assert!(!prefs.high_contrast());
}

#[test]
fn test_contrast_accepts_only_boolean_text() {
    assert_eq!(parse_contrast("true"), Some(true));
    assert_eq!(parse_contrast("false"), Some(false));
    assert_eq!(parse_contrast("TRUE"), None);
    assert_eq!(parse_contrast("1"), None);
    assert_eq!(parse_contrast(""), None);

    let mut storage = MemoryStorage::new();
    storage.set_item(HIGH_CONTRAST_KEY, "true").unwrap();
    assert!(AccessibilityPrefs::load(storage.clone()).high_contrast());

    storage.set_item(HIGH_CONTRAST_KEY, "on").unwrap();
    assert!(!AccessibilityPrefs::load(storage).high_contrast());
}

#[test]
fn test_write_failure_keeps_new_value() {
    let mut prefs = AccessibilityPrefs::load(ReadOnlyStorage);

    assert!(prefs.cycle_font_scale().is_err());
    assert_eq!(prefs.font_scale(), FontScale::Large);

    assert!(prefs.toggle_contrast().is_err());
    assert!(prefs.high_contrast());
}
