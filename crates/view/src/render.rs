//! State to view tree. Pure: the same state always gives the same tree.

use crate::tree::{Bubble, LOW_CONFIDENCE_NOTE, MenuItem, Node, View};
use chrono::Local;
use ncore::{ChatState, Message, Outcome, Panel};

/// Dashboard entries in menu order.
pub const MENU: [MenuItem; 3] = [
    MenuItem {
        command: "advisor",
        title: "Career Advisor",
        description: "General career guidance and job search tips",
    },
    MenuItem {
        command: "resume",
        title: "Resume Chat",
        description: "Upload your resume and chat about it",
    },
    MenuItem {
        command: "toolkit",
        title: "Resume Toolkit",
        description: "Match a resume to a job or ask questions about it",
    },
];

/// Render `state` into a view tree.
pub fn render(state: &ChatState) -> View {
    let mut nodes = Vec::new();
    if !state.ui.fullscreen {
        nodes.push(header(&state.panel));
    }

    match &state.panel {
        Panel::Dashboard => nodes.push(Node::Menu(MENU.to_vec())),
        Panel::ResumeUpload { file } => nodes.push(Node::UploadPrompt {
            file: file
                .as_ref()
                .and_then(|f| f.file_name())
                .map(|n| n.to_string_lossy().into_owned()),
        }),
        Panel::Toolkit => toolkit(state, &mut nodes),
        Panel::Assistant | Panel::AdvisorChat | Panel::ResumeChat => {
            if state.panel == Panel::Assistant && state.conversation.is_empty() {
                nodes.push(Node::Welcome {
                    title: "Welcome to the future of Assistance",
                    body: "Nova is ready to analyze your documents, process images, \
                           and help you build amazing things.",
                });
            }
            nodes.extend(
                state
                    .conversation
                    .messages()
                    .iter()
                    .map(|m| Node::Bubble(bubble(m))),
            );
        }
    }

    if state.ui.loading {
        match &state.ui.status {
            Some(status) => nodes.push(Node::Overlay(status.clone())),
            None if state.panel.is_chat() => nodes.push(Node::Typing),
            // the toolkit shows its progress track instead
            None => {}
        }
    }

    let chips = state.chips();
    if !chips.is_empty() && !state.ui.loading {
        nodes.push(Node::Chips(chips.into_iter().map(str::to_owned).collect()));
    }

    View {
        fullscreen: state.ui.fullscreen,
        nodes,
    }
}

/// Render one message.
pub fn bubble(message: &Message) -> Bubble {
    Bubble {
        role: message.role,
        content: message.content.clone(),
        time: message
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string(),
        caveat: message.is_low_confidence().then_some(LOW_CONFIDENCE_NOTE),
    }
}

fn header(panel: &Panel) -> Node {
    let (title, subtitle) = match panel {
        Panel::Assistant => ("Nova AI", "Nova Intelligence Hub v2.0"),
        Panel::Dashboard => ("Career Dashboard", "Choose how you want to get help"),
        Panel::AdvisorChat => ("Career Advisor", "General career guidance"),
        Panel::ResumeUpload { .. } => ("Resume Chat", "Upload your resume to begin"),
        Panel::ResumeChat => ("Resume Chat", "Chatting about your resume"),
        Panel::Toolkit => ("Resume Toolkit", "Match and Q&A"),
    };
    Node::Header { title, subtitle }
}

fn toolkit(state: &ChatState, nodes: &mut Vec<Node>) {
    let toolkit = &state.toolkit;
    if let Some(progress) = &toolkit.progress {
        nodes.push(Node::Progress {
            steps: progress.steps().collect(),
            percent: progress.percent(),
        });
    }
    match &toolkit.outcome {
        Some(Outcome::Match { score, verdict }) => nodes.push(Node::MatchResult {
            score: score.round().clamp(0.0, 100.0) as u8,
            verdict: *verdict,
        }),
        Some(Outcome::Answer(answer)) => nodes.push(Node::Answer(answer.clone())),
        None => {}
    }
}
