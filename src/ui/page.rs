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

//! Page coordinator
//!
//! `Portal` is the only place where the controllers meet. It owns the timer
//! queue, the settings and the injected clock/entropy, routes every
//! `PageEvent` to the controller it concerns and dispatches fired timers.
//!
//! # Event flow
//!
//! ```text
//! handle(event) ──▶ controller ──▶ (maybe) TimerQueue.schedule
//!                                          │
//! advance(d) ◀──────── pop_due ◀──────────┘
//!      │
//!      └──▶ dispatch(PageTimer) ──▶ controller ──▶ (maybe) more timers
//! ```
//!
//! Nothing here blocks or sleeps: time moves only through `advance`.

use std::time::Duration;

use crate::config::{AccessibilityPrefs, FontScale, Settings, Storage};
use crate::core::{
    accordion::default_faq, service_info::service_detail, Accordion, CategoryFilter, Disclosure,
    FaqItem,
};
use crate::ui::{
    chat::{ChatSession, CANNED_REPLIES},
    chrome::{Key, NavigationController},
    contact::{default_fields, ContactForm, SubmitOutcome},
    modal::{ClickTarget, ModalContent, ModalHost, Overlay, OverlayId, OverlayPhase},
    providers::{Clock, Entropy, SeededEntropy, SystemClock},
    scheduler::{TimerId, TimerQueue},
    services::ServicesController,
};

/// Everything that can be scheduled on the page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageTimer {
    /// Hero slider autoplay tick
    SlideAdvance,
    /// Delayed close of a navbar dropdown
    DropdownHide(usize),
    /// Catalog search debounce
    SearchDebounce,
    /// Simulated contact form response
    SubmitComplete,
    /// Scripted bot reply for a chat overlay
    ChatReply(OverlayId),
    /// Overlay fade-in finished
    ModalShown(OverlayId),
    /// Overlay fade-out finished
    ModalRemove(OverlayId),
}

/// The page's timer queue
pub type Timers = TimerQueue<PageTimer>;

/// Static shape of the page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageLayout {
    /// Hero slides
    pub slides: usize,
    /// Navbar dropdowns
    pub dropdowns: usize,
    /// Elements animated on scroll
    pub reveal_targets: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            slides: 3,
            dropdowns: 2,
            reveal_targets: 8,
        }
    }
}

/// User interaction with the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageEvent {
    // Chrome
    NextSlide,
    PrevSlide,
    HeroPointerEnter,
    HeroPointerLeave,
    KeyPress(Key),
    ToggleMobileMenu,
    ClickOutsideMenu,
    DropdownEnter(usize),
    DropdownLeave(usize),
    DropdownKey(usize, Key),
    Scroll(u32),
    BackToTop,
    Intersect(usize),
    CycleFontScale,
    ToggleContrast,
    SearchBoxInput(String),
    SelectSuggestion(usize),
    SubmitSearch,
    ClickOutsideSearch,

    // Services
    SelectTab(CategoryFilter),
    CatalogSearch(String),
    RevealStats,

    // Contact
    FieldInput { field: String, value: String },
    FieldBlur(String),
    SubmitContact,

    // Overlays
    OpenChat,
    OpenMap,
    OpenServiceRedirect(String),
    OpenServiceInfo(String),
    ModalClick(ClickTarget),
    ChatSend(String),
    ProceedToService,
    GetDirections,

    // FAQ
    ToggleFaq(usize),
}

/// The whole interactive page
pub struct Portal<S: Storage> {
    settings: Settings,
    timers: Timers,
    clock: Box<dyn Clock>,
    entropy: Box<dyn Entropy>,

    chrome: NavigationController<S>,
    services: ServicesController,
    contact: ContactForm,
    faq_items: Vec<FaqItem>,
    faq: Accordion,
    modal: ModalHost,
}

impl<S: Storage> Portal<S> {
    /// Creates the page with the default layout
    ///
    /// Accessibility preferences are read from `storage` once, and slider
    /// autoplay starts immediately.
    pub fn new(settings: Settings, storage: S) -> Self {
        Self::with_layout(settings, storage, PageLayout::default())
    }

    /// Creates the page with an explicit layout
    pub fn with_layout(settings: Settings, storage: S, layout: PageLayout) -> Self {
        let prefs = AccessibilityPrefs::load(storage);
        let mut chrome =
            NavigationController::new(&settings, layout.slides, layout.dropdowns, prefs);
        chrome.observe(layout.reveal_targets);

        let mut timers = Timers::new();
        chrome.start(&mut timers);

        let faq_items = default_faq();

        tracing::debug!(?layout, "page loaded");
        Self {
            services: ServicesController::with_default_catalog(settings.search_debounce()),
            contact: ContactForm::new(default_fields(), settings.submit_delay()),
            faq: Accordion::new(faq_items.len()),
            faq_items,
            modal: ModalHost::new(settings.modal_fade_in(), settings.modal_fade_out()),
            chrome,
            timers,
            settings,
            clock: Box::new(SystemClock),
            entropy: Box::new(SeededEntropy::from_os()),
        }
    }

    /// Replaces the clock provider
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the randomness provider
    pub fn with_entropy(mut self, entropy: impl Entropy + 'static) -> Self {
        self.entropy = Box::new(entropy);
        self
    }

    // ---------------------------------------------------------------
    // Event routing
    // ---------------------------------------------------------------

    /// Handles one interaction
    ///
    /// Returns a user-facing notice when the interaction produces one (mock
    /// search, redirect, directions).
    pub fn handle(&mut self, event: PageEvent) -> Option<String> {
        let timers = &mut self.timers;

        match event {
            PageEvent::NextSlide => self.chrome.next_slide(timers),
            PageEvent::PrevSlide => self.chrome.prev_slide(timers),
            PageEvent::HeroPointerEnter => self.chrome.pointer_enter_hero(timers),
            PageEvent::HeroPointerLeave => self.chrome.pointer_leave_hero(timers),
            PageEvent::KeyPress(key) => self.chrome.key_press(key, timers),
            PageEvent::ToggleMobileMenu => {
                self.chrome.toggle_mobile_menu();
            }
            PageEvent::ClickOutsideMenu => self.chrome.click_outside_menu(),
            PageEvent::DropdownEnter(index) => self.chrome.dropdown_enter(index, timers),
            PageEvent::DropdownLeave(index) => self.chrome.dropdown_leave(index, timers),
            PageEvent::DropdownKey(index, key) => self.chrome.dropdown_key(index, key, timers),
            PageEvent::Scroll(y) => self.chrome.scroll_to(y),
            PageEvent::BackToTop => self.chrome.back_to_top(),
            PageEvent::Intersect(index) => {
                self.chrome.intersect(index);
            }
            PageEvent::CycleFontScale => {
                self.chrome.cycle_font_scale();
            }
            PageEvent::ToggleContrast => {
                self.chrome.toggle_contrast();
            }
            PageEvent::SearchBoxInput(text) => self.chrome.search_input(&text),
            PageEvent::SelectSuggestion(index) => return self.chrome.select_suggestion(index),
            PageEvent::SubmitSearch => return self.chrome.submit_search(),
            PageEvent::ClickOutsideSearch => self.chrome.click_outside_search(),

            PageEvent::SelectTab(tab) => self.services.select_tab(tab),
            PageEvent::CatalogSearch(text) => self.services.search_input(&text, timers),
            PageEvent::RevealStats => self.services.reveal_stats(timers.now()),

            PageEvent::FieldInput { field, value } => {
                self.contact.input(&field, &value);
            }
            PageEvent::FieldBlur(field) => {
                self.contact.blur(&field);
            }
            PageEvent::SubmitContact => {
                if let SubmitOutcome::Busy = self.contact.submit(timers) {
                    tracing::debug!("submit ignored while sending");
                }
            }

            PageEvent::OpenChat => {
                let chat = ChatSession::new(self.clock.as_ref());
                self.modal.open(ModalContent::Chat(chat), timers);
            }
            PageEvent::OpenMap => {
                self.modal.open(ModalContent::Map, timers);
            }
            PageEvent::OpenServiceRedirect(service) => {
                self.modal
                    .open(ModalContent::ServiceRedirect { service }, timers);
            }
            PageEvent::OpenServiceInfo(service) => {
                let detail = service_detail(&service);
                self.modal
                    .open(ModalContent::ServiceInfo { service, detail }, timers);
            }
            PageEvent::ModalClick(target) => {
                self.modal.click(target, timers);
            }
            PageEvent::ChatSend(text) => self.send_chat(&text),
            PageEvent::ProceedToService => return self.proceed_to_service(),
            PageEvent::GetDirections => return self.directions(),

            PageEvent::ToggleFaq(index) => {
                if self.faq.toggle(index).is_none() {
                    tracing::debug!(index, "no FAQ item at index");
                }
            }
        }

        None
    }

    fn send_chat(&mut self, text: &str) {
        let Some(id) = self.modal.current().map(Overlay::id) else {
            tracing::debug!("chat message with no overlay open");
            return;
        };
        let Some(chat) = self.modal.chat_mut(id) else {
            tracing::debug!("chat message while chat is not open");
            return;
        };

        if chat.send(text, self.clock.as_ref()) {
            let delay = self.settings.chat_reply_min()
                + self.entropy.jitter(self.settings.chat_reply_jitter());
            self.timers.schedule(delay, PageTimer::ChatReply(id));
            tracing::debug!(delay_ms = delay.as_millis() as u64, "bot reply scheduled");
        }
    }

    /// Content of the current overlay unless it is fading out
    fn live_content(&self) -> Option<&ModalContent> {
        self.modal
            .current()
            .filter(|overlay| overlay.phase() != OverlayPhase::Closing)
            .map(Overlay::content)
    }

    fn proceed_to_service(&mut self) -> Option<String> {
        let service = match self.live_content() {
            Some(ModalContent::ServiceRedirect { service })
            | Some(ModalContent::ServiceInfo { service, .. }) => service.clone(),
            _ => {
                tracing::debug!("proceed with no service overlay open");
                return None;
            }
        };

        self.modal.close(&mut self.timers);
        tracing::info!(%service, "redirecting to service");
        Some(format!(
            "Redirecting to {} portal...\n\nThis is a demo - in a real implementation, you would be redirected to the official service portal.",
            service
        ))
    }

    fn directions(&self) -> Option<String> {
        match self.live_content() {
            Some(ModalContent::Map) => Some(
                "In a real implementation, this would open your default maps application with directions to our office."
                    .to_string(),
            ),
            _ => None,
        }
    }

    // ---------------------------------------------------------------
    // Time
    // ---------------------------------------------------------------

    /// Current virtual time since page load
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Lets `by` elapse, firing every timer that falls due
    ///
    /// Timers scheduled while dispatching fire in the same call if they fall
    /// due before the end of the interval.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        while let Some((id, task)) = self.timers.pop_due(until) {
            self.dispatch(id, task);
        }
        self.timers.set_now(until);
    }

    fn dispatch(&mut self, id: TimerId, task: PageTimer) {
        let timers = &mut self.timers;

        match task {
            PageTimer::SlideAdvance => self.chrome.on_autoplay(id, timers),
            PageTimer::DropdownHide(index) => self.chrome.on_dropdown_hide(index, id),
            PageTimer::SearchDebounce => self.services.on_debounce(id),
            PageTimer::SubmitComplete => {
                if let Some(reference) = self.contact.complete(id, self.clock.as_ref()) {
                    self.modal.open(ModalContent::Success { reference }, timers);
                }
            }
            PageTimer::ChatReply(overlay) => match self.modal.chat_mut(overlay) {
                Some(chat) => {
                    let index = self.entropy.pick(CANNED_REPLIES.len());
                    chat.reply(index, self.clock.as_ref());
                }
                None => tracing::debug!(?overlay, "bot reply dropped, chat closed"),
            },
            PageTimer::ModalShown(overlay) => self.modal.on_shown(overlay),
            PageTimer::ModalRemove(overlay) => self.modal.on_remove(overlay),
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Effective settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Pending timers
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Navigation and chrome state
    pub fn chrome(&self) -> &NavigationController<S> {
        &self.chrome
    }

    /// Service catalog state
    pub fn services(&self) -> &ServicesController {
        &self.services
    }

    /// Contact form state
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Overlay host
    pub fn modal(&self) -> &ModalHost {
        &self.modal
    }

    /// FAQ questions and answers
    pub fn faq_items(&self) -> &[FaqItem] {
        &self.faq_items
    }

    /// FAQ accordion state
    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    /// Whether FAQ item `index` is open
    pub fn faq_state(&self, index: usize) -> Disclosure {
        self.faq.state(index)
    }

    /// Current font scale
    pub fn font_scale(&self) -> FontScale {
        self.chrome.prefs().font_scale()
    }

    /// Whether high contrast is on
    pub fn high_contrast(&self) -> bool {
        self.chrome.prefs().high_contrast()
    }

    /// Statistic display strings at the current virtual time
    pub fn stat_displays(&self) -> Vec<String> {
        self.services.stat_displays(self.timers.now())
    }
}
