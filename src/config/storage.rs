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

//! Local-storage style key/value persistence
//!
//! Preferences are stored as string values under string keys, the same
//! shape browsers give scripts. Two backends are provided:
//!
//! - `MemoryStorage`: lives as long as the process
//! - `FileStorage`: a flat TOML table on disk, rewritten atomically on
//!   every `set_item`
//!
//! # Example
//!
//! ```no_run
//! use portal_widgets::config::{FileStorage, Storage};
//!
//! let mut storage = FileStorage::open("~/.config/portal-widgets/storage.toml")?;
//! storage.set_item("fontSize", "110")?;
//! assert_eq!(storage.get_item("fontSize")?, Some("110".to_string()));
//! # Ok::<(), portal_widgets::config::ConfigError>(())
//! ```

use atomic_write_file::AtomicWriteFile;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::ConfigError;

/// String key/value store
pub trait Storage {
    /// Returns the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// In-process storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set_item(key, value)
    }
}

/// Storage backed by a TOML file
///
/// The file holds a single flat table of string values. It is read once on
/// `open` and rewritten in full after every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (or prepares to create) the storage file at `path`
    ///
    /// A leading `~` is expanded. A missing file is treated as empty; the
    /// parent directory is created on first write.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8,
    /// `ConfigError::Parse` if the file exists but is not a string table.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = expand_path(path.as_ref())?;

        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str::<BTreeMap<String, String>>(&content).map_err(|e| {
                ConfigError::Parse {
                    path: path.clone(),
                    message: e.to_string(),
                }
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), items = items.len(), "opened storage");

        Ok(Self { path, items })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ConfigError> {
        let parent = self.path.parent().ok_or_else(|| {
            ConfigError::InvalidPath(format!("{} has no parent directory", self.path.display()))
        })?;
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string(&self.items).map_err(|e| ConfigError::Serialise(e.to_string()))?;

        // Temp file + rename, so a crash never leaves a half-written table
        let mut file = AtomicWriteFile::options()
            .open(&self.path)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.commit()
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let previous = self.items.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist() {
            // Keep memory and disk in step
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}

/// Expands a leading `~` in `path`
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath("Invalid path encoding".to_string()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}
