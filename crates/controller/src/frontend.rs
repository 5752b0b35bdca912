//! The seam between controllers and whatever paints the screen.

use ncore::ChatState;

/// Receives state changes and user-facing notices.
pub trait Frontend {
    /// Repaint from the current state. Called after every mutation.
    fn render(&mut self, state: &ChatState);

    /// Show a modal notice.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;
}
