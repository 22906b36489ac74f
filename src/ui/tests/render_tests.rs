//! View function tests

use std::collections::BTreeMap;

use crate::core::{Accordion, FaqItem, SearchBanner, Slider, Span, ValidationError};
use crate::ui::{
    chat::ChatSession,
    providers::FixedClock,
    render::{
        banner_text, chat_lines, faq_lines, form_error_lines, markup, slider_dots,
        NO_RESULTS_HINT,
    },
};

#[test]
fn test_markup_wraps_marks() {
    let spans = vec![
        Span::Plain("Apply for ".to_string()),
        Span::Mark("GST".to_string()),
        Span::Plain(" now".to_string()),
    ];

    assert_eq!(markup(&spans), "Apply for <mark>GST</mark> now");
}

#[test]
fn test_slider_dots() {
    let mut slider = Slider::new(3).unwrap();
    slider.next();

    assert_eq!(slider_dots(&slider), "○ ● ○");
}

#[test]
fn test_banner_pluralisation() {
    let one = SearchBanner::Found {
        count: 1,
        query: "umang".to_string(),
    };
    assert_eq!(
        banner_text(&one).unwrap(),
        "Found 1 service matching \"umang\""
    );

    let none = SearchBanner::Found {
        count: 0,
        query: "xyz".to_string(),
    };
    let text = banner_text(&none).unwrap();
    assert!(text.starts_with("Found 0 services matching \"xyz\""));
    assert!(text.ends_with(NO_RESULTS_HINT));

    assert!(banner_text(&SearchBanner::Hidden).is_none());
}

#[test]
fn test_form_error_lines() {
    let mut errors = BTreeMap::new();
    errors.insert("email".to_string(), ValidationError::InvalidEmail);
    errors.insert("name".to_string(), ValidationError::RequiredFieldMissing);

    assert_eq!(
        form_error_lines(&errors),
        vec![
            "email: Please enter a valid email address",
            "name: This field is required"
        ]
    );
}

#[test]
fn test_chat_lines_carry_time() {
    // 09:05 UTC
    let clock = FixedClock::new(9 * 3_600_000 + 5 * 60_000);
    let mut chat = ChatSession::new(&clock);
    chat.send("hello", &clock);

    let lines = chat_lines(&chat);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[09:05] Support: Hello!"));
    assert_eq!(lines[1], "[09:05] You: hello");
}

#[test]
fn test_faq_lines_show_open_answer() {
    let items = vec![
        FaqItem {
            question: "Q1".to_string(),
            answer: "A1".to_string(),
        },
        FaqItem {
            question: "Q2".to_string(),
            answer: "A2".to_string(),
        },
    ];
    let mut accordion = Accordion::new(2);
    accordion.toggle(1);

    assert_eq!(
        faq_lines(&items, &accordion),
        vec!["[+] Q1", "[-] Q2", "    A2"]
    );
}
