//! Pure view functions
//!
//! Each function turns controller state into display text and nothing else.
//! The CLI prints these; a front end could map them onto real elements.

use std::collections::BTreeMap;

use crate::core::{
    Accordion, FaqItem, SearchBanner, ServiceDetail, Slider, Span, ValidationError,
};
use crate::ui::{
    chat::{ChatSession, Sender},
    modal::{ModalContent, Overlay, OFFICE_ADDRESS},
};

/// Hint appended to the banner when nothing matches
pub const NO_RESULTS_HINT: &str = "Try different keywords or browse all services";

/// Spans as markup with `<mark>` around highlighted runs
pub fn markup(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => text.clone(),
            Span::Mark(text) => format!("<mark>{}</mark>", text),
        })
        .collect()
}

/// Slider indicator dots, the active one filled
pub fn slider_dots(slider: &Slider) -> String {
    (0..slider.len())
        .map(|i| if slider.is_active(i) { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Search result banner text, `None` while hidden
pub fn banner_text(banner: &SearchBanner) -> Option<String> {
    match banner {
        SearchBanner::Hidden => None,
        SearchBanner::Found { count, query } => {
            let noun = if *count == 1 { "service" } else { "services" };
            let mut text = format!("Found {} {} matching \"{}\"", count, noun, query);
            if *count == 0 {
                text.push('\n');
                text.push_str(NO_RESULTS_HINT);
            }
            Some(text)
        }
    }
}

/// Inline form errors, one `field: message` line each
pub fn form_error_lines(errors: &BTreeMap<String, ValidationError>) -> Vec<String> {
    errors
        .iter()
        .map(|(field, error)| format!("{}: {}", field, error))
        .collect()
}

/// Chat transcript lines
pub fn chat_lines(chat: &ChatSession) -> Vec<String> {
    chat.messages()
        .iter()
        .map(|message| {
            let who = match message.sender {
                Sender::User => "You",
                Sender::Bot => "Support",
            };
            format!("[{}] {}: {}", message.time, who, message.text)
        })
        .collect()
}

fn detail_lines(detail: &ServiceDetail) -> Vec<String> {
    let mut lines = vec![
        "About this Service".to_string(),
        format!("  {}", detail.description),
        "Required Documents".to_string(),
    ];
    lines.extend(detail.documents.iter().map(|doc| format!("  - {}", doc)));
    lines.push("Processing Time".to_string());
    lines.push(format!("  {}", detail.processing_time));
    lines.push("Fees".to_string());
    lines.push(format!("  {}", detail.fees));
    lines
}

/// Overlay heading followed by its body
pub fn overlay_lines(overlay: &Overlay) -> Vec<String> {
    let content = overlay.content();
    let mut lines = vec![content.title()];

    match content {
        ModalContent::Success { reference } => {
            lines.push(
                "Thank you for contacting us. We have received your message and will get back to you within 24 hours."
                    .to_string(),
            );
            lines.push(format!("Reference ID: #{}", reference));
        }
        ModalContent::Chat(chat) => lines.extend(chat_lines(chat)),
        ModalContent::Map => {
            lines.push("Interactive Map".to_string());
            lines.push(OFFICE_ADDRESS.to_string());
        }
        ModalContent::ServiceRedirect { service } => {
            lines.push(format!(
                "You are being redirected to the official {} portal.",
                service
            ));
        }
        ModalContent::ServiceInfo { detail, .. } => lines.extend(detail_lines(detail)),
    }

    lines
}

/// FAQ questions with `+`/`-` markers, answers under open items
pub fn faq_lines(items: &[FaqItem], accordion: &Accordion) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let open = accordion.state(i).is_open();
        lines.push(format!("[{}] {}", if open { "-" } else { "+" }, item.question));
        if open {
            lines.push(format!("    {}", item.answer));
        }
    }
    lines
}
