//! Nova wire protocol: JSON bodies exchanged with the chat and
//! resume-analysis backend.
//!
//! Response fields the backend may leave out are optional here; the client
//! decides which absences are errors.

use ncore::{Message, Role};
use serde::{Deserialize, Serialize};

pub mod api;

/// One turn of Gemini-style history sent with `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    /// `user` or `model`.
    pub role: String,
    /// Turn content, always a single part.
    pub parts: Vec<String>,
}

impl From<&Message> for HistoryTurn {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.history_name().to_owned(),
            parts: vec![message.content.clone()],
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message.
    pub message: String,
    /// Prior turns, oldest first.
    pub history: Vec<HistoryTurn>,
}

impl ChatRequest {
    /// Build a request from a message and the thread that preceded it.
    pub fn new(message: impl Into<String>, history: &[Message]) -> Self {
        Self {
            message: message.into(),
            history: history.iter().map(HistoryTurn::from).collect(),
        }
    }
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply.
    #[serde(default)]
    pub response: Option<String>,
    /// Backend-reported failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Extracted document text.
    #[serde(default)]
    pub content: Option<String>,
    /// Name the backend saw.
    #[serde(default)]
    pub filename: Option<String>,
    /// Backend-reported failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// A message as reported in `conversation_history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Message role.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Answer confidence, when the backend scored it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Backend timestamp; not used for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl From<HistoryEntry> for Message {
    fn from(entry: HistoryEntry) -> Self {
        Message::new(entry.role, entry.content).with_confidence(entry.confidence)
    }
}

/// Response of both session-creation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// New session id.
    pub session_id: String,
    /// Initial history, normally the welcome message.
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
    /// Initial suggestion chips.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Body of `POST /chatbot/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Target session.
    pub session_id: String,
    /// User message.
    pub message: String,
}

/// Response of `POST /chatbot/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Assistant answer.
    pub answer: String,
    /// Answer confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: Option<f32>,
    /// Follow-up suggestion chips.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Full session history after this exchange.
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response of `POST /match`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Score in `[0, 100]`.
    pub match_score: f64,
}

/// Response of `POST /qa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    /// Answer text.
    pub answer: String,
}

/// Response of `GET /chatbot/history/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Session history.
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response of `GET /chatbot/session/{id}/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Session id.
    pub session_id: String,
    /// Messages in the session history.
    pub message_count: usize,
    /// Whether the session was created from a resume.
    pub has_resume: bool,
    /// Backend agent description.
    pub agent_type: String,
}

/// Response of `DELETE /chatbot/session/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    /// Confirmation text.
    pub message: String,
}

/// Error body: `{error}` from the chat backend, `{detail}` from the
/// resume backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Application error.
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP exception detail.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// The reported message, if any.
    pub fn message(self) -> Option<String> {
        self.error.or(self.detail)
    }
}
