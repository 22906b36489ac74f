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

//! src/core/mod.rs
//!
//! Core widget state
//!
//! This module contains the data and state machines behind every widget:
//! - Type definitions for catalog entries, categories and highlight spans
//! - Catalog filtering, search and highlighting
//! - Slider index and playback state
//! - Disclosure flags and the FAQ accordion
//! - Contact form validation
//! - Mocked service details, search suggestions and statistic counters
//!
//! Nothing here knows about timers or storage, so every rule can be unit
//! tested without a running page.

pub mod accordion;
pub mod catalog;
pub mod counter;
pub mod service_info;
pub mod slider;
pub mod suggest;
pub mod types;
pub mod validator;

pub use accordion::{Accordion, Disclosure, FaqItem};
pub use catalog::{CatalogQuery, EntryView, SearchBanner};
pub use slider::{Playback, Slider};
pub use types::*;
pub use validator::{validate_field, FieldKind, FieldSpec, ValidationError};

#[cfg(test)]
mod tests;
