//! In-memory conversation store.

use crate::message::{Message, Role};

/// A server-assigned conversation context.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque identifier issued by the backend.
    pub id: String,
    /// Authoritative history as last reported by the backend.
    pub history: Vec<Message>,
}

/// Ordered message thread plus the active session, if any.
///
/// Grows without bound; duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    session: Option<Session>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message built from its parts.
    pub fn append(&mut self, role: Role, content: impl Into<String>, confidence: Option<f32>) {
        self.push(Message::new(role, content).with_confidence(confidence));
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop all messages and the session.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.session = None;
    }

    /// Replace the message thread wholesale.
    pub fn set_history(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Record a new session and show its history.
    pub fn start_session(&mut self, id: impl Into<String>, history: Vec<Message>) {
        self.messages = history.clone();
        self.session = Some(Session {
            id: id.into(),
            history,
        });
    }

    /// Update the backend's view of the session history without touching
    /// the displayed thread.
    pub fn sync_session(&mut self, history: Vec<Message>) {
        if let Some(session) = self.session.as_mut() {
            session.history = history;
        }
    }

    /// The displayed messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the thread is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The active session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The active session id.
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }
}
