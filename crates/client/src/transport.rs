//! Transport trait abstracting the backend.
//!
//! Uses RPITIT, no dyn dispatch. Controllers are generic over it so tests
//! can script responses without a server.

use crate::error::{Error, Result};
use ncore::Message;
use std::{future::Future, path::Path};

/// A file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Name reported to the backend.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Wrap in-memory contents.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, naming the part after the file.
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { file_name, bytes })
    }
}

/// Text extracted from an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Name the backend saw.
    pub file_name: String,
    /// Extracted text.
    pub content: String,
}

/// A freshly created backend session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStart {
    /// Session id.
    pub session_id: String,
    /// Initial history, normally the welcome message.
    pub history: Vec<Message>,
    /// Initial suggestion chips.
    pub suggestions: Vec<String>,
}

/// The backend's answer within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Answer text.
    pub answer: String,
    /// Answer confidence.
    pub confidence: Option<f32>,
    /// Follow-up suggestion chips.
    pub suggestions: Vec<String>,
    /// Session history after the exchange.
    pub history: Vec<Message>,
}

/// Calls the client makes against the backend.
pub trait Transport {
    /// Stateless chat turn; `history` is the thread before `message`.
    fn chat(
        &self,
        message: &str,
        history: &[Message],
    ) -> impl Future<Output = Result<String>> + Send;

    /// Upload a document and get its text back.
    fn upload(&self, file: Upload) -> impl Future<Output = Result<Extracted>> + Send;

    /// Start a general advisor session.
    fn create_general_session(&self) -> impl Future<Output = Result<SessionStart>> + Send;

    /// Start a session grounded in a resume.
    fn create_resume_session(
        &self,
        resume: Upload,
    ) -> impl Future<Output = Result<SessionStart>> + Send;

    /// Send a message within a session.
    fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> impl Future<Output = Result<Reply>> + Send;

    /// Score a resume against a job description, 0–100.
    fn match_resume(
        &self,
        resume: Upload,
        job_description: &str,
    ) -> impl Future<Output = Result<f64>> + Send;

    /// Ask a question about a resume.
    fn ask(&self, resume: Upload, question: &str) -> impl Future<Output = Result<String>> + Send;
}
