//! Single-screen assistant: stateless `/chat` turns with client-side history
//! and document upload.

use crate::{Frontend, SendOutcome};
use client::{Error, Transport, Upload};
use ncore::{
    ChatState, Message,
    upload::{self, upload_notice, upload_prompt},
};
use std::path::Path;

/// Shown when the backend cannot be reached.
pub const CONNECTION_ERROR: &str = "Connection error. Please check if the backend is running.";
/// Alert when the upload returned no text and no error.
pub const UPLOAD_FAILED: &str = "Failed to process file";
/// Alert when the upload or its follow-up chat turn failed in transit.
pub const UPLOAD_ERROR: &str = "Error uploading file";
/// Alert for files outside the allow-list.
pub const UNSUPPORTED_FILE: &str = "Unsupported file type (use .pdf, .docx, .png, .jpg or .jpeg)";

/// Inline reply for a failed chat turn.
fn failure_text(err: &Error) -> String {
    match err {
        Error::Network(_) => CONNECTION_ERROR.to_owned(),
        Error::Backend(message) => format!("Sorry, I encountered an error: {message}"),
        _ => "Sorry, I encountered an error: Unknown error".to_owned(),
    }
}

/// Drives the assistant screen.
pub struct AssistantController<T, F> {
    transport: T,
    frontend: F,
    state: ChatState,
}

impl<T: Transport, F: Frontend> AssistantController<T, F> {
    /// Create a controller on an empty assistant screen.
    pub fn new(transport: T, frontend: F) -> Self {
        Self {
            transport,
            frontend,
            state: ChatState::assistant(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// The frontend being driven.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Repaint.
    pub fn render(&mut self) {
        self.frontend.render(&self.state);
    }

    /// Replace the input line.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.ui.input = text.into();
    }

    /// Send the input line.
    ///
    /// Skipped when the input is blank or a request is in flight. The user
    /// message is appended before the call and kept if the call fails; the
    /// failure is reported as one assistant message after it.
    pub async fn send(&mut self) -> SendOutcome {
        let text = self.state.ui.input.trim().to_owned();
        if text.is_empty() || self.state.ui.loading {
            return SendOutcome::Skipped;
        }

        let history = self.state.conversation.messages().to_vec();
        self.state.conversation.push(Message::user(text.as_str()));
        self.state.ui.input.clear();
        self.state.ui.begin(None);
        self.render();

        let outcome = match self.transport.chat(&text, &history).await {
            Ok(reply) => {
                self.state.conversation.push(Message::assistant(reply));
                SendOutcome::Replied
            }
            Err(err) => {
                tracing::warn!("chat failed: {err}");
                self.state
                    .conversation
                    .push(Message::assistant(failure_text(&err)));
                SendOutcome::Failed
            }
        };

        self.state.ui.finish();
        self.render();
        outcome
    }

    /// Fill the input with a suggestion and send it at once.
    pub async fn click_suggestion(&mut self, suggestion: &str) -> SendOutcome {
        self.set_input(suggestion);
        self.render();
        self.send().await
    }

    /// Upload a document and ask the assistant about it.
    ///
    /// On success the thread gains the upload notice and the assistant's
    /// reply to a prompt carrying the extracted text. Failures are alerted and
    /// leave the thread untouched, except a failed follow-up turn, which keeps
    /// the notice.
    pub async fn upload(&mut self, path: &Path) -> bool {
        if !upload::is_accepted(path) {
            self.frontend.alert(UNSUPPORTED_FILE);
            return false;
        }
        if self.state.ui.loading {
            return false;
        }

        self.state.ui.begin(None);
        self.render();
        let uploaded = self.upload_inner(path).await;
        self.state.ui.finish();
        self.render();
        uploaded
    }

    async fn upload_inner(&mut self, path: &Path) -> bool {
        let file = match Upload::read(path).await {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!("{err}");
                self.frontend.alert(UPLOAD_ERROR);
                return false;
            }
        };

        let file_name = file.file_name.clone();
        let history = self.state.conversation.messages().to_vec();
        let extracted = match self.transport.upload(file).await {
            Ok(extracted) => extracted,
            Err(err) => {
                tracing::warn!("upload of {file_name} failed: {err}");
                let message = match &err {
                    Error::Backend(message) => message.as_str(),
                    Error::Missing(_) => UPLOAD_FAILED,
                    _ => UPLOAD_ERROR,
                };
                self.frontend.alert(message);
                return false;
            }
        };

        self.state
            .conversation
            .push(Message::user(upload_notice(&file_name)));
        self.render();

        let prompt = upload_prompt(&file_name, &extracted.content);
        match self.transport.chat(&prompt, &history).await {
            Ok(reply) => {
                self.state.conversation.push(Message::assistant(reply));
                true
            }
            Err(err) => {
                tracing::warn!("chat about {file_name} failed: {err}");
                self.frontend.alert(UPLOAD_ERROR);
                false
            }
        }
    }

    /// Empty the thread.
    pub fn clear(&mut self) {
        self.state.conversation.reset();
        self.render();
    }

    /// Flip fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        self.state.ui.fullscreen = !self.state.ui.fullscreen;
        self.render();
    }
}
