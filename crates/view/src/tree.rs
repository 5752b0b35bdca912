//! The view tree produced by [`render`](crate::render).

use ncore::{Role, StepStatus, Verdict};

/// Annotation shown under low-confidence answers.
pub const LOW_CONFIDENCE_NOTE: &str = "(Low confidence - please verify)";

/// A rendered screen.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Chrome hidden; no header is emitted.
    pub fullscreen: bool,
    /// Top-to-bottom content.
    pub nodes: Vec<Node>,
}

/// One piece of a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Title bar.
    Header {
        /// Title.
        title: &'static str,
        /// Line under the title.
        subtitle: &'static str,
    },
    /// Greeting on the empty assistant screen.
    Welcome {
        /// Headline.
        title: &'static str,
        /// Blurb.
        body: &'static str,
    },
    /// A chat message.
    Bubble(Bubble),
    /// Three-dot typing indicator.
    Typing,
    /// Loading overlay with status text.
    Overlay(String),
    /// Suggestion chips, numbered from 1.
    Chips(Vec<String>),
    /// Dashboard mode picker.
    Menu(Vec<MenuItem>),
    /// Resume upload screen.
    UploadPrompt {
        /// Chosen file name, if any.
        file: Option<String>,
    },
    /// Simulated toolkit progress.
    Progress {
        /// Every step with its status.
        steps: Vec<(&'static str, StepStatus)>,
        /// Bar fill, 0–100.
        percent: u8,
    },
    /// Match score result.
    MatchResult {
        /// Rounded score.
        score: u8,
        /// Band of the score.
        verdict: Verdict,
    },
    /// Q&A result.
    Answer(String),
}

/// A chat message as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Who sent it.
    pub role: Role,
    /// Text.
    pub content: String,
    /// Local `HH:MM`.
    pub time: String,
    /// Set to [`LOW_CONFIDENCE_NOTE`] when confidence is below threshold.
    pub caveat: Option<&'static str>,
}

/// An entry of the dashboard menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// REPL command that opens it.
    pub command: &'static str,
    /// Title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}
