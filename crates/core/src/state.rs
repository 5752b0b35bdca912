//! The state object handed to controllers and to the renderer.

use crate::{panel::Panel, store::Conversation, toolkit::Toolkit};

/// Suggestions shown on the empty assistant screen.
pub const WELCOME_SUGGESTIONS: [&str; 4] = [
    "Explain quantum mechanics simply",
    "How do I analyze this PDF document?",
    "Write a professional email for me",
    "Analyze the sentiment of this text",
];

/// Transient interface flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// A request is in flight.
    pub loading: bool,
    /// Text shown with the loading overlay instead of the typing dots.
    pub status: Option<String>,
    /// Chrome hidden.
    pub fullscreen: bool,
    /// Current input line.
    pub input: String,
    /// Suggestion chips offered by the backend.
    pub suggestions: Vec<String>,
}

impl UiState {
    /// Mark a request as started.
    pub fn begin(&mut self, status: Option<&str>) {
        self.loading = true;
        self.status = status.map(str::to_owned);
    }

    /// Mark the request as settled.
    pub fn finish(&mut self) {
        self.loading = false;
        self.status = None;
    }
}

/// Everything the view is rendered from.
#[derive(Debug, Clone)]
pub struct ChatState {
    /// Current screen.
    pub panel: Panel,
    /// Message thread and session.
    pub conversation: Conversation,
    /// Interface flags.
    pub ui: UiState,
    /// Match and Q&A tool state.
    pub toolkit: Toolkit,
}

impl ChatState {
    /// State for the single-screen assistant.
    pub fn assistant() -> Self {
        Self::on(Panel::Assistant)
    }

    /// State for the dashboard client.
    pub fn dashboard() -> Self {
        Self::on(Panel::Dashboard)
    }

    /// Suggestion chips currently offered, in display order.
    ///
    /// The empty assistant screen offers the welcome suggestions; chat
    /// screens offer whatever the backend last sent.
    pub fn chips(&self) -> Vec<&str> {
        match self.panel {
            Panel::Assistant if self.conversation.is_empty() => WELCOME_SUGGESTIONS.to_vec(),
            Panel::AdvisorChat | Panel::ResumeChat => {
                self.ui.suggestions.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    fn on(panel: Panel) -> Self {
        Self {
            panel,
            conversation: Conversation::new(),
            ui: UiState::default(),
            toolkit: Toolkit::default(),
        }
    }
}
