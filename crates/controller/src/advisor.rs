//! Dashboard client: career advisor chat, resume chat and the toolkit, all
//! backed by server-side sessions.

use crate::{Frontend, SendOutcome, assistant::UNSUPPORTED_FILE, toolkit};
use client::{SessionStart, Transport, Upload};
use ncore::{ChatState, Message, Outcome, Panel, Transition, UiState, upload};
use std::path::{Path, PathBuf};

/// Overlay while the advisor session is created.
pub const LAUNCHING: &str = "Launching Career Advisor...";
/// Overlay while the resume session is created.
pub const ANALYZING: &str = "Analyzing Resume & Initializing Toolkit...";
/// Alert when the advisor session cannot be created.
pub const ADVISOR_FAILED: &str = "Could not start Career Advisor";
/// Alert when the resume session cannot be created.
pub const SESSION_FAILED: &str = "Failed to start chat session. Please try again.";
/// Inline reply for any failed message.
pub const SEND_FAILED: &str = "Sorry, I encountered an error. Please try again.";
/// Confirmation asked before abandoning a chat.
pub const NEW_CHAT_PROMPT: &str = "Start a new conversation? This will clear the current chat.";

/// Drives the dashboard client.
pub struct AdvisorController<T, F> {
    transport: T,
    frontend: F,
    state: ChatState,
}

impl<T: Transport, F: Frontend> AdvisorController<T, F> {
    /// Create a controller on the dashboard.
    pub fn new(transport: T, frontend: F) -> Self {
        Self {
            transport,
            frontend,
            state: ChatState::dashboard(),
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

    /// Start a general session and enter the advisor chat.
    pub async fn open_advisor(&mut self) -> bool {
        let Some(next) = self.state.panel.apply(Transition::OpenAdvisor) else {
            return false;
        };
        if self.state.ui.loading {
            return false;
        }

        self.state.ui.begin(Some(LAUNCHING));
        self.render();
        let started = self.transport.create_general_session().await;
        self.state.ui.finish();

        let opened = match started {
            Ok(start) => {
                self.enter(next, start);
                true
            }
            Err(err) => {
                tracing::warn!("advisor session failed: {err}");
                self.frontend.alert(ADVISOR_FAILED);
                false
            }
        };
        self.render();
        opened
    }

    /// Show the resume upload screen.
    pub fn open_resume_upload(&mut self) -> bool {
        self.transition(Transition::OpenResumeUpload)
    }

    /// Show the toolkit screen.
    pub fn open_toolkit(&mut self) -> bool {
        self.transition(Transition::OpenToolkit)
    }

    /// Leave the upload or toolkit screen.
    pub fn back(&mut self) -> bool {
        self.transition(Transition::Back)
    }

    /// Choose the resume for the resume chat, or clear the choice.
    pub fn select_file(&mut self, file: Option<PathBuf>) -> bool {
        if let Some(path) = &file
            && !upload::is_accepted(path)
        {
            self.frontend.alert(UNSUPPORTED_FILE);
            return false;
        }
        self.transition(Transition::SelectFile(file))
    }

    /// Upload the chosen resume and enter the resume chat.
    pub async fn start_resume_chat(&mut self) -> bool {
        let Some(next) = self.state.panel.apply(Transition::StartResumeChat) else {
            return false;
        };
        let Some(path) = self.state.panel.selected_file().cloned() else {
            return false;
        };
        if self.state.ui.loading {
            return false;
        }

        self.state.ui.begin(Some(ANALYZING));
        self.render();
        let started = match Upload::read(&path).await {
            Ok(resume) => self.transport.create_resume_session(resume).await,
            Err(err) => Err(err),
        };
        self.state.ui.finish();

        let opened = match started {
            Ok(start) => {
                self.enter(next, start);
                true
            }
            Err(err) => {
                tracing::warn!("resume session failed: {err}");
                self.frontend.alert(SESSION_FAILED);
                false
            }
        };
        self.render();
        opened
    }

    /// Send the input line within the active session.
    ///
    /// The thread keeps its own copy of the exchange; the backend's history is
    /// stored on the session only.
    pub async fn send(&mut self) -> SendOutcome {
        let text = self.state.ui.input.trim().to_owned();
        if text.is_empty() || self.state.ui.loading {
            return SendOutcome::Skipped;
        }
        let Some(session_id) = self.state.conversation.session_id().map(str::to_owned) else {
            return SendOutcome::Skipped;
        };

        self.state.conversation.push(Message::user(text.as_str()));
        self.state.ui.input.clear();
        self.state.ui.begin(None);
        self.render();

        let outcome = match self.transport.send_message(&session_id, &text).await {
            Ok(reply) => {
                self.state.conversation.push(
                    Message::assistant(reply.answer).with_confidence(reply.confidence),
                );
                self.state.conversation.sync_session(reply.history);
                if !reply.suggestions.is_empty() {
                    self.state.ui.suggestions = reply.suggestions;
                }
                SendOutcome::Replied
            }
            Err(err) => {
                tracing::warn!("message in session {session_id} failed: {err}");
                self.state
                    .conversation
                    .push(Message::assistant(SEND_FAILED).with_confidence(Some(0.0)));
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

    /// Abandon the current chat after confirmation and return to the
    /// dashboard. Fullscreen survives.
    pub fn new_chat(&mut self) -> bool {
        if !self.frontend.confirm(NEW_CHAT_PROMPT) {
            return false;
        }
        tracing::info!("starting a new conversation");
        self.state.conversation.reset();
        self.state.toolkit.reset();
        self.state.ui = UiState {
            fullscreen: self.state.ui.fullscreen,
            ..UiState::default()
        };
        self.state.panel = self
            .state
            .panel
            .apply(Transition::Reset)
            .unwrap_or(Panel::Dashboard);
        self.render();
        true
    }

    /// Flip fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        self.state.ui.fullscreen = !self.state.ui.fullscreen;
        self.render();
    }

    /// Run the match tool. Only available on the toolkit screen.
    pub async fn run_match(
        &mut self,
        resume: Option<&Path>,
        job_description: &str,
    ) -> Option<Outcome> {
        if self.state.panel != Panel::Toolkit || self.state.ui.loading {
            return None;
        }
        toolkit::run_match(
            &self.transport,
            &mut self.frontend,
            &mut self.state,
            resume,
            job_description,
        )
        .await
    }

    /// Run the Q&A tool. Only available on the toolkit screen.
    pub async fn run_qa(&mut self, resume: Option<&Path>, question: &str) -> Option<Outcome> {
        if self.state.panel != Panel::Toolkit || self.state.ui.loading {
            return None;
        }
        toolkit::run_qa(
            &self.transport,
            &mut self.frontend,
            &mut self.state,
            resume,
            question,
        )
        .await
    }

    fn enter(&mut self, panel: Panel, start: SessionStart) {
        tracing::info!("session {} started", start.session_id);
        self.state.panel = panel;
        self.state
            .conversation
            .start_session(start.session_id, start.history);
        self.state.ui.suggestions = start.suggestions;
    }

    fn transition(&mut self, transition: Transition) -> bool {
        match self.state.panel.apply(transition) {
            Some(next) => {
                if next == Panel::Toolkit || self.state.panel == Panel::Toolkit {
                    self.state.toolkit.reset();
                }
                self.state.panel = next;
                self.render();
                true
            }
            None => false,
        }
    }
}
