//! Terminal frontend: repaints the screen from state, shows toolkit progress
//! with an `indicatif` bar and asks questions with `dialoguer`.

use console::{Term, style};
use controller::Frontend;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use ncore::ChatState;

/// How much of the screen the frontend owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Clear and repaint on every render (REPLs).
    Screen,
    /// Only draw progress; the caller prints the result (one-shot commands).
    Inline,
}

/// [`Frontend`] writing to stdout.
pub struct TermFrontend {
    term: Term,
    mode: Mode,
    bar: Option<ProgressBar>,
}

impl TermFrontend {
    /// Create a frontend in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            term: Term::stdout(),
            mode,
            bar: None,
        }
    }

    /// Paint `state` below whatever is on screen.
    pub fn print(&self, state: &ChatState) {
        let view = view::render(state);
        let mut out = self.term.clone();
        if let Err(e) = view::paint(&view, &mut out) {
            tracing::warn!("failed to paint: {e}");
        }
    }

    fn progress(&mut self, percent: u8, label: &str) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(100);
            if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos:>3}% {msg}")
            {
                bar.set_style(style.progress_chars("█▉ "));
            }
            bar
        });
        bar.set_position(u64::from(percent));
        bar.set_message(label.to_owned());
    }
}

impl Frontend for TermFrontend {
    fn render(&mut self, state: &ChatState) {
        if let Some(track) = &state.toolkit.progress {
            let label = track.label().unwrap_or_default();
            self.progress(track.percent(), label);
            return;
        }
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        match self.mode {
            Mode::Screen => {
                if let Err(e) = self.term.clear_screen() {
                    tracing::debug!("failed to clear screen: {e}");
                }
                self.print(state);
            }
            Mode::Inline => {}
        }
    }

    /// Blocks until Enter in screen mode.
    fn alert(&mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        let line = format!("{} {message}", style("!").red().bold());
        if let Err(e) = self.term.write_line(&line) {
            tracing::debug!("failed to write alert: {e}");
            return;
        }
        if self.mode == Mode::Screen {
            let _ = self
                .term
                .write_str(&style("  press Enter to continue").dim().to_string());
            let _ = self.term.read_line();
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
