// Copyright 2025 bakri (tidynest@proton.me)
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

//! Portal Widgets
//!
//! Headless state for the interactive parts of a citizen services portal:
//! a hero slider, navigation chrome, a filterable service catalog, a
//! validated contact form, modal overlays with a scripted chat and an FAQ
//! accordion.
//!
//! # Features
//!
//! - **Deterministic time:** Every delay runs on a virtual-time timer queue
//! - **Typed state:** Open/closed flags, playback and overlay phases are enums
//! - **Persistent preferences:** Font scale and contrast survive a reload
//! - **Injectable providers:** Clock and randomness are swappable for tests
//!
//! # Architecture
//!
//! - **`core`:** Pure models (slider, catalog, accordion, validator, counters)
//! - **`config`:** Settings, storage and accessibility preferences
//! - **`ui`:** Controllers, the `Portal` coordinator and views
//! - **`logging`:** Subscriber setup for the binary
//!
//! # Examples
//!
//! ## Searching the catalog
//!
//! ```
//! use portal_widgets::config::{MemoryStorage, Settings};
//! use portal_widgets::ui::{PageEvent, Portal};
//! use std::time::Duration;
//!
//! let mut portal = Portal::new(Settings::default(), MemoryStorage::new());
//! portal.handle(PageEvent::CatalogSearch("license".to_string()));
//! portal.advance(Duration::from_millis(300));
//!
//! assert_eq!(portal.services().visible_count(), 2);
//! ```
//!
//! ## Validating a field
//!
//! ```
//! use portal_widgets::core::{validate_field, FieldKind, FieldSpec, ValidationError};
//!
//! let email = FieldSpec::new("email", FieldKind::Email, true);
//! assert_eq!(validate_field(&email, "not-an-email"), Err(ValidationError::InvalidEmail));
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{Settings, Storage};
pub use ui::{PageEvent, Portal};
