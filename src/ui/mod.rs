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

//! Headless page controllers
//!
//! # Architecture
//!
//! - **Model**: slider, catalog, accordion, validator (in `core`), preferences (in `config`)
//! - **View**: pure functions of controller state (in `render.rs`)
//! - **Controller**: one per page area, coordinated by `Portal` (in `page.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── page.rs         // Portal: event routing and timer dispatch
//! ├── chrome.rs       // Slider, menus, scroll, accessibility, search box
//! ├── services.rs     // Catalog tabs, debounced search, counters
//! ├── contact.rs      // Contact form and simulated submission
//! ├── modal.rs        // Single overlay slot with fades
//! ├── chat.rs         // Scripted chat transcript
//! ├── render.rs       // Views
//! ├── scheduler.rs    // Virtual-time timer queue
//! └── providers.rs    // Clock and randomness
//! ```

pub mod chat;
pub mod chrome;
pub mod contact;
pub mod modal;
pub mod page;
pub mod providers;
pub mod render;
pub mod scheduler;
pub mod services;

pub use {
    chrome::{Key, NavigationController, NavbarStyle},
    contact::{ContactForm, SubmitOutcome, SubmitState},
    modal::{ClickTarget, ModalContent, ModalHost, OverlayPhase},
    page::{PageEvent, PageLayout, PageTimer, Portal, Timers},
    providers::{Clock, Entropy, FixedClock, FixedEntropy, SeededEntropy, SystemClock},
    services::ServicesController,
};

#[cfg(test)]
mod tests;
