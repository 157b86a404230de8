//! # Conversation History
//!
//! Append-only list of chat messages for the lifetime of the session.
//! Messages are never edited or removed once pushed.

use crate::core::emphasis::{self, Segment};

/// Shown in place of a reply whenever a request fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request. Please try again.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "healthai",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: Vec<Segment>,
}

impl Message {
    /// A user message is shown exactly as typed, with no marker handling.
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            content: vec![Segment::Plain(sanitize(text))],
        }
    }

    /// An assistant reply with `**emphasis**` converted to strong runs.
    pub fn assistant(reply: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: emphasis::parse(&sanitize(reply)),
        }
    }

    /// The fixed assistant message used when a request fails.
    pub fn fallback() -> Self {
        Self {
            role: Role::Assistant,
            content: vec![Segment::Plain(FALLBACK_REPLY.to_string())],
        }
    }

    /// Unstyled text of the message.
    pub fn text(&self) -> String {
        emphasis::plain_text(&self.content)
    }
}

/// Strip control characters (other than newline and tab) so remote text
/// can't drive the terminal with escape sequences.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
