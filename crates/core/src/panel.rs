//! Screen state machine for the dashboard client.
//!
//! ```text
//! Dashboard ──OpenAdvisor──────▶ AdvisorChat
//!     │  ╰────OpenToolkit──────▶ Toolkit
//!     ╰──OpenResumeUpload──────▶ ResumeUpload{file} ──StartResumeChat──▶ ResumeChat
//! ```
//!
//! `Reset` returns any chat or upload screen to the dashboard. `Back` leaves
//! the upload and toolkit screens.

use std::path::PathBuf;

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Single-screen assistant chat; has no transitions.
    Assistant,
    /// Mode picker.
    Dashboard,
    /// General career advisor chat.
    AdvisorChat,
    /// Waiting for a resume file to be chosen.
    ResumeUpload {
        /// The chosen file, if any.
        file: Option<PathBuf>,
    },
    /// Chat grounded in an uploaded resume.
    ResumeChat,
    /// One-shot match and Q&A tools.
    Toolkit,
}

/// A user-driven panel change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Enter the advisor chat.
    OpenAdvisor,
    /// Enter the resume upload screen.
    OpenResumeUpload,
    /// Enter the toolkit screen.
    OpenToolkit,
    /// Choose (or clear) the resume file.
    SelectFile(Option<PathBuf>),
    /// Start the resume chat; needs a chosen file.
    StartResumeChat,
    /// Leave the upload or toolkit screen.
    Back,
    /// Abandon the current chat.
    Reset,
}

impl Panel {
    /// The panel reached by `transition`, or `None` if it does not apply.
    pub fn apply(&self, transition: Transition) -> Option<Panel> {
        use Transition::*;
        match (self, transition) {
            (Panel::Dashboard, OpenAdvisor) => Some(Panel::AdvisorChat),
            (Panel::Dashboard, OpenResumeUpload) => Some(Panel::ResumeUpload { file: None }),
            (Panel::Dashboard, OpenToolkit) => Some(Panel::Toolkit),
            (Panel::ResumeUpload { .. }, SelectFile(file)) => Some(Panel::ResumeUpload { file }),
            (Panel::ResumeUpload { file: Some(_) }, StartResumeChat) => Some(Panel::ResumeChat),
            (Panel::ResumeUpload { .. } | Panel::Toolkit, Back) => Some(Panel::Dashboard),
            (Panel::AdvisorChat | Panel::ResumeChat | Panel::ResumeUpload { .. }, Reset) => {
                Some(Panel::Dashboard)
            }
            _ => None,
        }
    }

    /// Whether the panel shows a message thread.
    pub fn is_chat(&self) -> bool {
        matches!(self, Panel::Assistant | Panel::AdvisorChat | Panel::ResumeChat)
    }

    /// The file chosen on the upload screen.
    pub fn selected_file(&self) -> Option<&PathBuf> {
        match self {
            Panel::ResumeUpload { file } => file.as_ref(),
            _ => None,
        }
    }
}
