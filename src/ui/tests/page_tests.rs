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

//! Portal tests
//!
//! End-to-end flows through `Portal::handle` and virtual time.

use std::time::Duration;

use regex::Regex;

use crate::config::{FontScale, MemoryStorage, Settings};
use crate::core::{Category, CategoryFilter, Disclosure};
use crate::ui::{
    chat::{Sender, CANNED_REPLIES, GREETING},
    contact::SubmitState,
    modal::{ClickTarget, ModalContent, OverlayPhase},
    page::{PageEvent, PageLayout, Portal},
    providers::{FixedClock, FixedEntropy, SeededEntropy},
};

/// Helper: Portal with a fixed clock and entropy over empty storage
fn portal() -> Portal<MemoryStorage> {
    Portal::new(Settings::default(), MemoryStorage::new())
        .with_clock(FixedClock::new(1_760_000_123_456))
        .with_entropy(FixedEntropy::new(2))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn slide(portal: &Portal<MemoryStorage>) -> usize {
    portal.chrome().slider().map(|s| s.current()).unwrap()
}

fn phase(portal: &Portal<MemoryStorage>) -> Option<OverlayPhase> {
    portal.modal().current().map(|o| o.phase())
}

fn fill_contact(portal: &mut Portal<MemoryStorage>) {
    for (field, value) in [
        ("name", "Ravi Kumar"),
        ("email", "ravi@example.in"),
        ("subject", "services"),
        ("message", "Please call me back."),
    ] {
        portal.handle(PageEvent::FieldInput {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

#[test]
fn test_slider_autoplay_with_hover_pause() {
    let mut portal = portal();

    portal.advance(ms(5000));
    assert_eq!(slide(&portal), 1);

    portal.handle(PageEvent::HeroPointerEnter);
    portal.advance(ms(30_000));
    assert_eq!(slide(&portal), 1);

    portal.handle(PageEvent::HeroPointerLeave);
    portal.advance(ms(4999));
    assert_eq!(slide(&portal), 1);
    portal.advance(ms(1));
    assert_eq!(slide(&portal), 2);
}

#[test]
fn test_slider_cycle_returns_to_start() {
    let mut portal = portal();

    for _ in 0..3 {
        portal.handle(PageEvent::NextSlide);
    }
    assert_eq!(slide(&portal), 0);

    portal.handle(PageEvent::NextSlide);
    portal.handle(PageEvent::PrevSlide);
    assert_eq!(slide(&portal), 0);
}

#[test]
fn test_page_without_slides() {
    let layout = PageLayout {
        slides: 0,
        ..PageLayout::default()
    };
    let mut portal = Portal::with_layout(Settings::default(), MemoryStorage::new(), layout);

    portal.handle(PageEvent::NextSlide);
    portal.advance(ms(10_000));

    assert!(portal.chrome().slider().is_none());
    assert!(portal.timers().is_empty());
}

#[test]
fn test_modal_lifecycle() {
    let mut portal = portal();

    portal.handle(PageEvent::OpenMap);
    assert_eq!(portal.modal().overlay_count(), 1);
    assert_eq!(phase(&portal), Some(OverlayPhase::Opening));

    portal.advance(ms(10));
    assert_eq!(phase(&portal), Some(OverlayPhase::Shown));

    portal.handle(PageEvent::ModalClick(ClickTarget::Content));
    assert_eq!(phase(&portal), Some(OverlayPhase::Shown));

    portal.handle(PageEvent::ModalClick(ClickTarget::Background));
    portal.advance(ms(299));
    assert_eq!(portal.modal().overlay_count(), 1);

    portal.advance(ms(1));
    assert_eq!(portal.modal().overlay_count(), 0);
}

#[test]
fn test_only_one_overlay_at_a_time() {
    let mut portal = portal();

    portal.handle(PageEvent::OpenMap);
    portal.handle(PageEvent::OpenServiceInfo("Aadhaar Services".to_string()));
    portal.handle(PageEvent::OpenChat);

    assert_eq!(portal.modal().overlay_count(), 1);
    assert!(portal.modal().chat().is_some());
}

#[test]
fn test_contact_success_overlay_reference() {
    let mut portal = portal();
    fill_contact(&mut portal);

    portal.handle(PageEvent::SubmitContact);
    assert_eq!(portal.contact().state(), SubmitState::Sending);
    assert_eq!(portal.contact().submit_label(), "Sending...");

    portal.advance(ms(1999));
    assert_eq!(portal.modal().overlay_count(), 0);

    portal.advance(ms(1));
    let overlay = portal.modal().current().unwrap();
    let ModalContent::Success { reference } = overlay.content() else {
        panic!("expected success overlay");
    };

    assert!(Regex::new(r"^REF\d{6}$").unwrap().is_match(reference));
    assert_eq!(reference, "REF123456");
    assert_eq!(portal.contact().state(), SubmitState::Idle);
    assert_eq!(portal.contact().submit_label(), "Send Message");
    assert_eq!(portal.contact().value("email"), "");
}

#[test]
fn test_contact_rejected_stays_idle() {
    let mut portal = portal();
    fill_contact(&mut portal);
    portal.handle(PageEvent::FieldInput {
        field: "email".to_string(),
        value: "not-an-email".to_string(),
    });

    portal.handle(PageEvent::SubmitContact);
    portal.advance(ms(5000));

    assert_eq!(portal.contact().state(), SubmitState::Idle);
    assert!(portal.contact().error("email").is_some());
    assert_eq!(portal.modal().overlay_count(), 0);
}

#[test]
fn test_catalog_search_debounced() {
    let mut portal = portal();

    portal.handle(PageEvent::CatalogSearch("reg".to_string()));
    portal.advance(ms(250));
    portal.handle(PageEvent::CatalogSearch("license".to_string()));
    portal.advance(ms(250));
    assert_eq!(portal.services().visible_count(), 9);

    portal.advance(ms(50));
    assert_eq!(portal.services().visible_count(), 2);

    portal.handle(PageEvent::SelectTab(CategoryFilter::Only(Category::Citizen)));
    assert_eq!(portal.services().visible_count(), 4);
}

#[test]
fn test_chat_reply_arrives_after_delay() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenChat);
    portal.handle(PageEvent::ChatSend("  Where is my passport?  ".to_string()));

    let chat = portal.modal().chat().unwrap();
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[0].text, GREETING);
    assert_eq!(chat.messages()[1].text, "Where is my passport?");

    portal.advance(ms(999));
    assert_eq!(portal.modal().chat().unwrap().messages().len(), 2);

    portal.advance(ms(1));
    let chat = portal.modal().chat().unwrap();
    let reply = chat.messages().last().unwrap();
    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(reply.text, CANNED_REPLIES[2]);
    assert_eq!(chat.awaiting_replies(), 0);
}

#[test]
fn test_chat_reply_within_jitter_window() {
    let mut portal = Portal::new(Settings::default(), MemoryStorage::new())
        .with_clock(FixedClock::new(0))
        .with_entropy(SeededEntropy::from_seed(11));
    portal.handle(PageEvent::OpenChat);
    portal.handle(PageEvent::ChatSend("hi".to_string()));

    portal.advance(ms(999));
    assert_eq!(portal.modal().chat().unwrap().messages().len(), 2);

    portal.advance(ms(2001));
    assert_eq!(portal.modal().chat().unwrap().messages().len(), 3);
}

#[test]
fn test_blank_chat_message_ignored() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenChat);
    portal.handle(PageEvent::ChatSend("   ".to_string()));
    portal.advance(ms(5000));

    assert_eq!(portal.modal().chat().unwrap().messages().len(), 1);
}

#[test]
fn test_chat_reply_dropped_after_close() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenChat);
    portal.handle(PageEvent::ChatSend("hello".to_string()));
    portal.handle(PageEvent::ModalClick(ClickTarget::CloseControl));

    portal.advance(ms(5000));
    assert_eq!(portal.modal().overlay_count(), 0);
}

#[test]
fn test_proceed_to_service() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenServiceRedirect("Passport Services".to_string()));

    let notice = portal.handle(PageEvent::ProceedToService).unwrap();
    assert!(notice.starts_with("Redirecting to Passport Services portal..."));
    assert_eq!(phase(&portal), Some(OverlayPhase::Closing));

    assert!(portal.handle(PageEvent::ProceedToService).is_none());
}

#[test]
fn test_service_info_uses_detail_table() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenServiceInfo("Driving License".to_string()));

    let Some(ModalContent::ServiceInfo { detail, .. }) =
        portal.modal().current().map(|o| o.content())
    else {
        panic!("expected service info overlay");
    };
    assert!(!detail.documents.is_empty());
    assert_ne!(detail.fees, "Contact service provider");
}

#[test]
fn test_directions_only_from_map() {
    let mut portal = portal();
    assert!(portal.handle(PageEvent::GetDirections).is_none());

    portal.handle(PageEvent::OpenMap);
    assert!(portal.handle(PageEvent::GetDirections).is_some());
}

#[test]
fn test_directions_ignored_while_closing() {
    let mut portal = portal();
    portal.handle(PageEvent::OpenMap);
    portal.advance(ms(10));

    portal.handle(PageEvent::ModalClick(ClickTarget::Background));
    assert_eq!(phase(&portal), Some(OverlayPhase::Closing));
    assert!(portal.handle(PageEvent::GetDirections).is_none());

    portal.advance(ms(300));
    assert!(portal.handle(PageEvent::GetDirections).is_none());
}

#[test]
fn test_next_slide_while_hovered_resumes_rotation() {
    let mut portal = portal();
    portal.handle(PageEvent::HeroPointerEnter);
    portal.handle(PageEvent::NextSlide);

    portal.advance(ms(5000));
    assert_eq!(slide(&portal), 2);
}

#[test]
fn test_accessibility_survives_reload() {
    let mut portal = portal();
    portal.handle(PageEvent::CycleFontScale);
    portal.handle(PageEvent::CycleFontScale);
    portal.handle(PageEvent::ToggleContrast);

    let storage = portal.chrome().prefs().storage().clone();
    let reloaded = Portal::new(Settings::default(), storage);

    assert_eq!(reloaded.font_scale(), FontScale::Larger);
    assert!(reloaded.high_contrast());
}

#[test]
fn test_faq_single_open() {
    let mut portal = portal();

    portal.handle(PageEvent::ToggleFaq(0));
    portal.handle(PageEvent::ToggleFaq(2));
    assert_eq!(portal.faq_state(0), Disclosure::Closed);
    assert_eq!(portal.faq_state(2), Disclosure::Open);

    portal.handle(PageEvent::ToggleFaq(99));
    assert_eq!(portal.faq().open_index(), Some(2));
}

#[test]
fn test_header_search_notice() {
    let mut portal = portal();
    portal.handle(PageEvent::SearchBoxInput("voter".to_string()));

    let notice = portal.handle(PageEvent::SubmitSearch).unwrap();
    assert!(notice.contains("\"voter\""));
}

#[test]
fn test_stats_follow_virtual_time() {
    let mut portal = portal();
    portal.advance(ms(100));
    portal.handle(PageEvent::RevealStats);

    portal.advance(ms(2000));
    assert_eq!(portal.stat_displays()[1], "25.0M+");
}
