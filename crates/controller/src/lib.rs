//! Binds user actions to backend calls and state updates.
//!
//! Each controller owns its [`ChatState`](ncore::ChatState), a
//! [`Transport`](client::Transport) and a [`Frontend`]. Handlers take
//! `&mut self`, so at most one request is in flight per controller.

pub use {
    advisor::AdvisorController,
    assistant::AssistantController,
    frontend::Frontend,
    toolkit::{ToolkitController, run_match, run_qa},
};

pub mod advisor;
pub mod assistant;
mod frontend;
pub mod toolkit;

/// What a send did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent: blank input, a request in flight, or no session.
    Skipped,
    /// The backend replied.
    Replied,
    /// The request failed and an error reply was appended.
    Failed,
}
