//! Chat messages exchanged with the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confidence below this value gets a caveat when rendered.
pub const LOW_CONFIDENCE: f32 = 0.5;

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message
    pub role: Role,

    /// The content of the message
    pub content: String,

    /// Backend-supplied reliability of the answer, in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// When the message was created locally
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with the given role
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            confidence: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach a confidence score
    pub fn with_confidence(mut self, confidence: Option<f32>) -> Self {
        self.confidence = confidence;
        self
    }

    /// Whether the message should carry a low-confidence caveat.
    ///
    /// Messages without a confidence score never do.
    pub fn is_low_confidence(&self) -> bool {
        self.confidence.is_some_and(|c| c < LOW_CONFIDENCE)
    }
}

/// The role of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// The user role
    #[serde(rename = "user")]
    User,
    /// The assistant role, `model` in Gemini-style history
    #[serde(rename = "assistant", alias = "model")]
    Assistant,
}

impl Role {
    /// Role name in Gemini-style history turns.
    pub fn history_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}
