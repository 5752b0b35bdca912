//! Nova core: the conversation store and the interface state it drives.
//!
//! Pure data; no I/O. Controllers mutate a [`ChatState`] and the view renders
//! it.

pub use {
    message::{LOW_CONFIDENCE, Message, Role},
    panel::{Panel, Transition},
    progress::{ProgressTrack, STEP_DURATION, STEPS, StepStatus},
    state::{ChatState, UiState, WELCOME_SUGGESTIONS},
    store::{Conversation, Session},
    toolkit::{Outcome, Tool, Toolkit, Verdict},
};

pub mod message;
pub mod panel;
pub mod progress;
pub mod state;
pub mod store;
pub mod toolkit;
pub mod upload;
