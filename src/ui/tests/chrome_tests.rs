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

//! Navigation controller tests
//!
//! Timers are fired by hand here; `page_tests` covers the same flows through
//! `Portal`.

use std::time::Duration;

use crate::config::{
    preferences::FONT_SIZE_KEY, AccessibilityPrefs, FontScale, MemoryStorage, Settings, Storage,
};
use crate::core::Disclosure;
use crate::ui::{
    chrome::{Key, NavbarStyle, NavigationController},
    page::{PageTimer, Timers},
};

/// Helper: Controller with three slides and two dropdowns, autoplay started
fn setup() -> (NavigationController<MemoryStorage>, Timers) {
    setup_with(3)
}

fn setup_with(slides: usize) -> (NavigationController<MemoryStorage>, Timers) {
    let prefs = AccessibilityPrefs::load(MemoryStorage::new());
    let mut chrome = NavigationController::new(&Settings::default(), slides, 2, prefs);
    let mut timers = Timers::new();
    chrome.start(&mut timers);
    (chrome, timers)
}

/// Helper: Lets `ms` elapse, dispatching chrome timers
fn run(chrome: &mut NavigationController<MemoryStorage>, timers: &mut Timers, ms: u64) {
    let until = timers.now() + Duration::from_millis(ms);
    while let Some((id, task)) = timers.pop_due(until) {
        match task {
            PageTimer::SlideAdvance => chrome.on_autoplay(id, timers),
            PageTimer::DropdownHide(index) => chrome.on_dropdown_hide(index, id),
            other => panic!("unexpected timer {:?}", other),
        }
    }
    timers.set_now(until);
}

fn current(chrome: &NavigationController<MemoryStorage>) -> usize {
    chrome.slider().map(|s| s.current()).unwrap()
}

#[test]
fn test_autoplay_advances_every_interval() {
    let (mut chrome, mut timers) = setup();

    run(&mut chrome, &mut timers, 4999);
    assert_eq!(current(&chrome), 0);

    run(&mut chrome, &mut timers, 1);
    assert_eq!(current(&chrome), 1);

    run(&mut chrome, &mut timers, 10_000);
    assert_eq!(current(&chrome), 0, "wraps after the last slide");
}

#[test]
fn test_manual_navigation_restarts_timer() {
    let (mut chrome, mut timers) = setup();

    run(&mut chrome, &mut timers, 4000);
    chrome.next_slide(&mut timers);
    assert_eq!(current(&chrome), 1);

    // The original tick at 5000 was cancelled
    run(&mut chrome, &mut timers, 4999);
    assert_eq!(current(&chrome), 1);

    run(&mut chrome, &mut timers, 1);
    assert_eq!(current(&chrome), 2);
}

#[test]
fn test_prev_from_first_wraps_to_last() {
    let (mut chrome, mut timers) = setup();

    chrome.prev_slide(&mut timers);
    assert_eq!(current(&chrome), 2);
}

#[test]
fn test_arrow_keys_move_slider() {
    let (mut chrome, mut timers) = setup();

    chrome.key_press(Key::ArrowRight, &mut timers);
    chrome.key_press(Key::ArrowRight, &mut timers);
    assert_eq!(current(&chrome), 2);

    chrome.key_press(Key::ArrowLeft, &mut timers);
    assert_eq!(current(&chrome), 1);

    chrome.key_press(Key::Enter, &mut timers);
    assert_eq!(current(&chrome), 1);
}

#[test]
fn test_hover_pauses_autoplay() {
    let (mut chrome, mut timers) = setup();

    chrome.pointer_enter_hero(&mut timers);
    assert!(!chrome.autoplay_armed(&timers));

    run(&mut chrome, &mut timers, 20_000);
    assert_eq!(current(&chrome), 0);

    chrome.pointer_leave_hero(&mut timers);
    assert!(chrome.autoplay_armed(&timers));
    run(&mut chrome, &mut timers, 5000);
    assert_eq!(current(&chrome), 1);
}

#[test]
fn test_manual_advance_while_hovered_restarts_timer() {
    let (mut chrome, mut timers) = setup();

    chrome.pointer_enter_hero(&mut timers);
    chrome.next_slide(&mut timers);

    assert_eq!(current(&chrome), 1);
    assert!(chrome.autoplay_armed(&timers));

    run(&mut chrome, &mut timers, 4999);
    assert_eq!(current(&chrome), 1);
    run(&mut chrome, &mut timers, 1);
    assert_eq!(current(&chrome), 2);

    // Entering again stops the restarted interval
    chrome.pointer_enter_hero(&mut timers);
    run(&mut chrome, &mut timers, 20_000);
    assert_eq!(current(&chrome), 2);
}

#[test]
fn test_zero_slides_is_inert() {
    let (mut chrome, mut timers) = setup_with(0);

    chrome.next_slide(&mut timers);
    chrome.pointer_leave_hero(&mut timers);

    assert!(chrome.slider().is_none());
    assert!(timers.is_empty());
}

#[test]
fn test_mobile_menu_toggle_and_click_outside() {
    let (mut chrome, _) = setup();

    assert_eq!(chrome.toggle_mobile_menu(), Disclosure::Open);
    chrome.click_outside_menu();
    assert_eq!(chrome.mobile_menu(), Disclosure::Closed);

    chrome.toggle_mobile_menu();
    assert_eq!(chrome.toggle_mobile_menu(), Disclosure::Closed);
}

#[test]
fn test_dropdown_hides_after_delay() {
    let (mut chrome, mut timers) = setup();

    chrome.dropdown_enter(0, &mut timers);
    assert_eq!(chrome.dropdown(0), Disclosure::Open);

    chrome.dropdown_leave(0, &mut timers);
    run(&mut chrome, &mut timers, 149);
    assert_eq!(chrome.dropdown(0), Disclosure::Open);

    run(&mut chrome, &mut timers, 1);
    assert_eq!(chrome.dropdown(0), Disclosure::Closed);
}

#[test]
fn test_dropdown_reenter_cancels_hide() {
    let (mut chrome, mut timers) = setup();

    chrome.dropdown_enter(1, &mut timers);
    chrome.dropdown_leave(1, &mut timers);
    run(&mut chrome, &mut timers, 100);
    chrome.dropdown_enter(1, &mut timers);
    run(&mut chrome, &mut timers, 500);

    assert_eq!(chrome.dropdown(1), Disclosure::Open);
}

#[test]
fn test_dropdown_keyboard_toggle() {
    let (mut chrome, mut timers) = setup();

    chrome.dropdown_key(0, Key::Enter, &mut timers);
    assert_eq!(chrome.dropdown(0), Disclosure::Open);

    chrome.dropdown_key(0, Key::ArrowLeft, &mut timers);
    assert_eq!(chrome.dropdown(0), Disclosure::Open);

    chrome.dropdown_key(0, Key::Space, &mut timers);
    assert_eq!(chrome.dropdown(0), Disclosure::Closed);
}

#[test]
fn test_unknown_dropdown_is_ignored() {
    let (mut chrome, mut timers) = setup();

    chrome.dropdown_enter(7, &mut timers);
    chrome.dropdown_key(7, Key::Enter, &mut timers);

    assert_eq!(chrome.dropdown(7), Disclosure::Closed);
}

#[test]
fn test_scroll_thresholds() {
    let (mut chrome, _) = setup();

    chrome.scroll_to(100);
    assert_eq!(chrome.navbar_style(), NavbarStyle::Top);
    assert!(!chrome.back_to_top_visible());

    chrome.scroll_to(101);
    assert_eq!(chrome.navbar_style(), NavbarStyle::Scrolled);

    chrome.scroll_to(301);
    assert!(chrome.back_to_top_visible());

    chrome.back_to_top();
    assert_eq!(chrome.scroll_y(), 0);
    assert_eq!(chrome.navbar_style(), NavbarStyle::Top);
}

#[test]
fn test_reveal_happens_once() {
    let (mut chrome, _) = setup();
    chrome.observe(4);

    assert!(chrome.intersect(2));
    assert!(!chrome.intersect(2));
    assert!(chrome.is_revealed(2));

    assert!(!chrome.intersect(9), "unobserved index");
    assert!(!chrome.is_revealed(9));
}

#[test]
fn test_font_scale_persisted() {
    let (mut chrome, _) = setup();

    assert_eq!(chrome.cycle_font_scale(), FontScale::Large);
    assert_eq!(
        chrome.prefs().storage().get_item(FONT_SIZE_KEY).unwrap(),
        Some("110".to_string())
    );

    assert!(chrome.toggle_contrast());
    assert!(!chrome.toggle_contrast());
}

#[test]
fn test_search_box_suggestions() {
    let (mut chrome, _) = setup();

    chrome.search_input("p");
    assert!(chrome.suggestions().is_empty());

    chrome.search_input("pa");
    assert_eq!(chrome.suggestions(), &["Passport Application", "PAN Card"]);

    chrome.click_outside_search();
    assert!(chrome.suggestions().is_empty());
}

#[test]
fn test_select_suggestion_searches() {
    let (mut chrome, _) = setup();

    chrome.search_input("cert");
    let notice = chrome.select_suggestion(1).unwrap();

    assert!(notice.starts_with("Searching for: \"Marriage Certificate\""));
    assert_eq!(chrome.search_text(), "Marriage Certificate");
    assert!(chrome.suggestions().is_empty());
    assert!(chrome.select_suggestion(0).is_none());
}

#[test]
fn test_blank_search_does_nothing() {
    let (mut chrome, _) = setup();

    chrome.search_input("   ");
    assert!(chrome.submit_search().is_none());
}
