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

//! Modal overlay host
//!
//! One reusable overlay wraps any content in a dimmed full-screen layer.
//!
//! # Lifecycle
//!
//! ```text
//! open() ──▶ Opening ──(fade-in)──▶ Shown ──close()──▶ Closing ──(fade-out)──▶ removed
//! ```
//!
//! At most one overlay exists. Opening a new one removes the current one
//! immediately; timers belonging to a removed overlay are ignored because
//! they carry its `OverlayId`.

use std::time::Duration;

use crate::core::types::ServiceDetail;
use crate::ui::{
    chat::ChatSession,
    page::{PageTimer, Timers},
};

/// Office address shown on the map placeholder
pub const OFFICE_ADDRESS: &str = "Secretariat, New Delhi - 110001";

/// Identity of one overlay instance
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OverlayId(u64);

/// Fade state of the overlay
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverlayPhase {
    /// Added, fading in
    Opening,
    /// Fully visible
    Shown,
    /// Fading out, removed when the fade ends
    Closing,
}

/// What the overlay shows
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModalContent {
    /// Contact form confirmation
    Success { reference: String },
    /// Live chat panel
    Chat(ChatSession),
    /// Static map placeholder
    Map,
    /// "You are being redirected" prompt for a service
    ServiceRedirect { service: String },
    /// Detail panel for a service
    ServiceInfo { service: String, detail: ServiceDetail },
}

impl ModalContent {
    /// Heading shown at the top of the overlay
    pub fn title(&self) -> String {
        match self {
            ModalContent::Success { .. } => "Message Sent Successfully!".to_string(),
            ModalContent::Chat(_) => "Live Chat Support".to_string(),
            ModalContent::Map => "Office Location".to_string(),
            ModalContent::ServiceRedirect { service } => service.clone(),
            ModalContent::ServiceInfo { service, .. } => format!("{} - Information", service),
        }
    }
}

/// Where a click inside the overlay landed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickTarget {
    /// The dimmed layer around the content
    Background,
    /// Anywhere inside the content box
    Content,
    /// The close (×) button, or an OK/Cancel button that closes
    CloseControl,
}

/// The overlay currently on the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    phase: OverlayPhase,
    content: ModalContent,
}

impl Overlay {
    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }
}

/// Owner of the single overlay slot
#[derive(Debug)]
pub struct ModalHost {
    current: Option<Overlay>,
    next_id: u64,
    fade_in: Duration,
    fade_out: Duration,
}

impl ModalHost {
    /// Creates an empty host with the given fade durations
    pub fn new(fade_in: Duration, fade_out: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            fade_in,
            fade_out,
        }
    }

    /// Opens an overlay with `content`
    ///
    /// Any existing overlay is removed first.
    pub fn open(&mut self, content: ModalContent, timers: &mut Timers) -> OverlayId {
        if let Some(old) = self.current.take() {
            tracing::debug!(id = ?old.id, "replacing open overlay");
        }

        let id = OverlayId(self.next_id);
        self.next_id += 1;

        tracing::info!(title = %content.title(), "opening overlay");
        self.current = Some(Overlay {
            id,
            phase: OverlayPhase::Opening,
            content,
        });
        timers.schedule(self.fade_in, PageTimer::ModalShown(id));
        id
    }

    /// Handles a click on the overlay
    ///
    /// Background and close control start the fade-out; content clicks are
    /// ignored. Returns true if a close started.
    pub fn click(&mut self, target: ClickTarget, timers: &mut Timers) -> bool {
        match target {
            ClickTarget::Background | ClickTarget::CloseControl => self.close(timers),
            ClickTarget::Content => false,
        }
    }

    /// Starts closing the overlay
    ///
    /// No-op if nothing is open or it is already closing.
    pub fn close(&mut self, timers: &mut Timers) -> bool {
        let Some(overlay) = self.current.as_mut() else {
            return false;
        };
        if overlay.phase == OverlayPhase::Closing {
            return false;
        }

        overlay.phase = OverlayPhase::Closing;
        timers.schedule(self.fade_out, PageTimer::ModalRemove(overlay.id));
        true
    }

    /// Fade-in finished
    pub fn on_shown(&mut self, id: OverlayId) {
        if let Some(overlay) = self.current.as_mut() {
            if overlay.id == id && overlay.phase == OverlayPhase::Opening {
                overlay.phase = OverlayPhase::Shown;
            }
        }
    }

    /// Fade-out finished: remove the overlay
    pub fn on_remove(&mut self, id: OverlayId) {
        if self.current.as_ref().is_some_and(|o| o.id == id) {
            self.current = None;
            tracing::debug!(?id, "overlay removed");
        }
    }

    /// The overlay on the page, if any
    pub fn current(&self) -> Option<&Overlay> {
        self.current.as_ref()
    }

    /// Number of overlays on the page (0 or 1)
    pub fn overlay_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Chat session of overlay `id`, if it is still open and is a chat
    pub fn chat_mut(&mut self, id: OverlayId) -> Option<&mut ChatSession> {
        match self.current.as_mut() {
            Some(Overlay {
                id: current,
                phase,
                content: ModalContent::Chat(chat),
            }) if *current == id && *phase != OverlayPhase::Closing => Some(chat),
            _ => None,
        }
    }

    /// Chat session of the current overlay
    pub fn chat(&self) -> Option<&ChatSession> {
        match self.current.as_ref().map(|o| &o.content) {
            Some(ModalContent::Chat(chat)) => Some(chat),
            _ => None,
        }
    }
}
