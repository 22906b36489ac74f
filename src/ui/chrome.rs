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

//! Navigation and page-chrome controller
//!
//! # Responsibilities
//!
//! - Hero slider autoplay, manual and keyboard navigation, hover pause
//! - Mobile menu toggle and click-outside close
//! - Dropdown hover reveal with delayed hide, Enter/Space toggle
//! - Navbar restyle and back-to-top button driven by scroll offset
//! - One-shot scroll reveal of observed elements
//! - Accessibility preferences (font scale, contrast)
//! - Header search box suggestions and mock search
//!
//! Every method tolerates a missing target: no slides, an unknown dropdown
//! index or an empty search box simply do nothing.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::config::{AccessibilityPrefs, FontScale, Settings, Storage};
use crate::core::{
    suggest::{search_notice, suggest},
    Disclosure, Slider,
};
use crate::ui::{
    page::{PageTimer, Timers},
    scheduler::{TimerId, TimerSlot},
};

/// Keys the page reacts to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
}

/// Navbar look, chosen by scroll offset
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NavbarStyle {
    /// At (or near) the top of the page
    #[default]
    Top,
    /// Scrolled past the threshold
    Scrolled,
}

#[derive(Debug, Default)]
struct Dropdown {
    state: Disclosure,
    hide: TimerSlot,
}

/// Controller for the chrome shared by every page
pub struct NavigationController<S: Storage> {
    slider: Option<Slider>,
    autoplay: TimerSlot,
    slide_interval: Duration,

    mobile_menu: Disclosure,

    dropdowns: Vec<Dropdown>,
    dropdown_hide_delay: Duration,

    scroll_y: u32,
    navbar_threshold: u32,
    back_to_top_threshold: u32,
    revealed: BTreeSet<usize>,
    observed: usize,

    prefs: AccessibilityPrefs<S>,

    search_input: String,
    suggestions: Vec<&'static str>,
    suggestion_min_chars: usize,
}

impl<S: Storage> NavigationController<S> {
    /// Creates the controller
    ///
    /// # Arguments
    ///
    /// * `settings` - Timings and thresholds
    /// * `slide_count` - Number of hero slides (0 makes the slider inert)
    /// * `dropdown_count` - Number of navbar dropdowns
    /// * `prefs` - Accessibility preferences, already loaded
    pub fn new(
        settings: &Settings,
        slide_count: usize,
        dropdown_count: usize,
        prefs: AccessibilityPrefs<S>,
    ) -> Self {
        Self {
            slider: Slider::new(slide_count),
            autoplay: TimerSlot::new(),
            slide_interval: settings.slide_interval(),
            mobile_menu: Disclosure::Closed,
            dropdowns: (0..dropdown_count).map(|_| Dropdown::default()).collect(),
            dropdown_hide_delay: settings.dropdown_hide_delay(),
            scroll_y: 0,
            navbar_threshold: settings.navbar_scroll_threshold,
            back_to_top_threshold: settings.back_to_top_threshold,
            revealed: BTreeSet::new(),
            observed: 0,
            prefs,
            search_input: String::new(),
            suggestions: Vec::new(),
            suggestion_min_chars: settings.suggestion_min_chars,
        }
    }

    // ---------------------------------------------------------------
    // Slider
    // ---------------------------------------------------------------

    /// Starts autoplay (called once at page load)
    pub fn start(&mut self, timers: &mut Timers) {
        if self.slider.is_some() {
            self.arm_autoplay(timers);
        }
    }

    /// Slider state, `None` when there are no slides
    pub fn slider(&self) -> Option<&Slider> {
        self.slider.as_ref()
    }

    /// Returns true while the autoplay timer is pending
    pub fn autoplay_armed(&self, timers: &Timers) -> bool {
        self.autoplay.is_armed(timers)
    }

    /// Next button
    pub fn next_slide(&mut self, timers: &mut Timers) {
        self.manual_advance(timers, Slider::next);
    }

    /// Previous button
    pub fn prev_slide(&mut self, timers: &mut Timers) {
        self.manual_advance(timers, Slider::prev);
    }

    /// Pointer enters the hero section
    pub fn pointer_enter_hero(&mut self, timers: &mut Timers) {
        if let Some(slider) = self.slider.as_mut() {
            slider.pause();
            self.autoplay.clear(timers);
            tracing::debug!("slider paused");
        }
    }

    /// Pointer leaves the hero section
    pub fn pointer_leave_hero(&mut self, timers: &mut Timers) {
        if let Some(slider) = self.slider.as_mut() {
            slider.resume();
            self.arm_autoplay(timers);
            tracing::debug!("slider resumed");
        }
    }

    /// Global key press
    ///
    /// Arrow keys move the slider the same way the buttons do.
    pub fn key_press(&mut self, key: Key, timers: &mut Timers) {
        match key {
            Key::ArrowLeft => self.prev_slide(timers),
            Key::ArrowRight => self.next_slide(timers),
            _ => {}
        }
    }

    /// Autoplay timer fired
    pub fn on_autoplay(&mut self, id: TimerId, timers: &mut Timers) {
        if !self.autoplay.holds(id) {
            return;
        }
        self.autoplay.fired(id);

        let Some(slider) = self.slider.as_mut() else {
            return;
        };
        let index = slider.next();
        tracing::debug!(index, "autoplay advanced slide");
        self.arm_autoplay(timers);
    }

    /// Moves the slide and restarts the autoplay interval
    ///
    /// The interval restarts even while the pointer is over the hero; only
    /// entering the hero stops it.
    fn manual_advance(&mut self, timers: &mut Timers, step: fn(&mut Slider) -> usize) {
        let Some(slider) = self.slider.as_mut() else {
            return;
        };

        self.autoplay.clear(timers);
        let index = step(slider);
        tracing::debug!(index, "slide changed manually");
        self.arm_autoplay(timers);
    }

    fn arm_autoplay(&mut self, timers: &mut Timers) {
        self.autoplay
            .arm(timers, self.slide_interval, PageTimer::SlideAdvance);
    }

    // ---------------------------------------------------------------
    // Mobile menu and dropdowns
    // ---------------------------------------------------------------

    /// Hamburger button
    pub fn toggle_mobile_menu(&mut self) -> Disclosure {
        self.mobile_menu.toggle();
        self.mobile_menu
    }

    /// Click anywhere outside the menu and its toggle
    pub fn click_outside_menu(&mut self) {
        self.mobile_menu = Disclosure::Closed;
    }

    /// Mobile menu state
    pub fn mobile_menu(&self) -> Disclosure {
        self.mobile_menu
    }

    /// Dropdown state (closed for unknown indexes)
    pub fn dropdown(&self, index: usize) -> Disclosure {
        self.dropdowns
            .get(index)
            .map(|d| d.state)
            .unwrap_or_default()
    }

    /// Pointer enters dropdown `index`: open at once, cancel pending hide
    pub fn dropdown_enter(&mut self, index: usize, timers: &mut Timers) {
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            dropdown.hide.clear(timers);
            dropdown.state = Disclosure::Open;
        }
    }

    /// Pointer leaves dropdown `index`: close after the hide delay
    pub fn dropdown_leave(&mut self, index: usize, timers: &mut Timers) {
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            dropdown
                .hide
                .arm(timers, self.dropdown_hide_delay, PageTimer::DropdownHide(index));
        }
    }

    /// Key press on dropdown `index`: Enter and Space toggle it
    pub fn dropdown_key(&mut self, index: usize, key: Key, timers: &mut Timers) {
        if !matches!(key, Key::Enter | Key::Space) {
            return;
        }
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            dropdown.hide.clear(timers);
            dropdown.state.toggle();
        }
    }

    /// Dropdown hide timer fired
    pub fn on_dropdown_hide(&mut self, index: usize, id: TimerId) {
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            if dropdown.hide.holds(id) {
                dropdown.hide.fired(id);
                dropdown.state = Disclosure::Closed;
            }
        }
    }

    // ---------------------------------------------------------------
    // Scrolling
    // ---------------------------------------------------------------

    /// Page scrolled to vertical offset `y`
    pub fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }

    /// Current scroll offset
    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    /// Navbar look for the current offset
    pub fn navbar_style(&self) -> NavbarStyle {
        if self.scroll_y > self.navbar_threshold {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Top
        }
    }

    /// Whether the back-to-top button is shown
    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_y > self.back_to_top_threshold
    }

    /// Back-to-top button: scrolls to the top
    pub fn back_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Registers `count` elements for scroll reveal
    pub fn observe(&mut self, count: usize) {
        self.observed = count;
    }

    /// Element `index` entered the viewport
    ///
    /// Returns true the first time only.
    pub fn intersect(&mut self, index: usize) -> bool {
        index < self.observed && self.revealed.insert(index)
    }

    /// Whether element `index` has been revealed
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    // ---------------------------------------------------------------
    // Accessibility
    // ---------------------------------------------------------------

    /// Font-size button
    pub fn cycle_font_scale(&mut self) -> FontScale {
        if let Err(e) = self.prefs.cycle_font_scale() {
            tracing::warn!(error = %e, "font size preference not saved");
        }
        self.prefs.font_scale()
    }

    /// Contrast button
    pub fn toggle_contrast(&mut self) -> bool {
        if let Err(e) = self.prefs.toggle_contrast() {
            tracing::warn!(error = %e, "contrast preference not saved");
        }
        self.prefs.high_contrast()
    }

    /// Accessibility preferences
    pub fn prefs(&self) -> &AccessibilityPrefs<S> {
        &self.prefs
    }

    // ---------------------------------------------------------------
    // Header search box
    // ---------------------------------------------------------------

    /// Text typed into the search box
    pub fn search_input(&mut self, text: &str) {
        self.search_input = text.to_string();
        self.suggestions = suggest(text, self.suggestion_min_chars);
    }

    /// Current search box text
    pub fn search_text(&self) -> &str {
        &self.search_input
    }

    /// Suggestions currently shown
    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Click on suggestion `index`: fill the box and search
    pub fn select_suggestion(&mut self, index: usize) -> Option<String> {
        let chosen = *self.suggestions.get(index)?;
        self.search_input = chosen.to_string();
        self.suggestions.clear();
        search_notice(chosen)
    }

    /// Search button or Enter
    pub fn submit_search(&mut self) -> Option<String> {
        self.suggestions.clear();
        let notice = search_notice(&self.search_input);
        if notice.is_some() {
            tracing::info!(query = %self.search_input, "mock search");
        }
        notice
    }

    /// Click outside the search box hides suggestions
    pub fn click_outside_search(&mut self) {
        self.suggestions.clear();
    }
}
