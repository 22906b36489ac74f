//! Scripted live-chat session
//!
//! The chat opens with a bot greeting. Each user message is echoed at once;
//! the page then schedules one canned bot reply per message after a
//! randomised delay (see `ui::page`).

use crate::ui::providers::Clock;

/// First message of every chat
pub const GREETING: &str = "Hello! I'm here to help you. How can I assist you today?";

/// Canned bot replies
pub const CANNED_REPLIES: [&str; 5] = [
    "Thank you for your message. Let me help you with that.",
    "I understand your concern. Let me connect you with the right department.",
    "That's a great question! Here's what I can tell you...",
    "I'm processing your request. Please hold on for a moment.",
    "Is there anything else I can help you with today?",
];

/// Longest message the input accepts
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Author of a chat line
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the transcript
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// `HH:MM` label
    pub time: String,
}

/// Transcript of one chat overlay
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    awaiting_replies: usize,
}

impl ChatSession {
    /// Starts a session with the greeting
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
                time: clock.time_label(),
            }],
            awaiting_replies: 0,
        }
    }

    /// Transcript in order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Bot replies still scheduled
    pub fn awaiting_replies(&self) -> usize {
        self.awaiting_replies
    }

    /// Appends a user line
    ///
    /// The text is trimmed and cut to `MAX_MESSAGE_CHARS`. Returns false (and
    /// appends nothing) for blank input, in which case no reply is due.
    pub fn send(&mut self, text: &str, clock: &dyn Clock) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.chars().take(MAX_MESSAGE_CHARS).collect(),
            time: clock.time_label(),
        });
        self.awaiting_replies += 1;
        true
    }

    /// Appends canned reply `index` (wrapped into range)
    pub fn reply(&mut self, index: usize, clock: &dyn Clock) {
        let text = CANNED_REPLIES[index % CANNED_REPLIES.len()];
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.to_string(),
            time: clock.time_label(),
        });
        self.awaiting_replies = self.awaiting_replies.saturating_sub(1);
    }
}
