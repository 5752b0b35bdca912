//! One-shot match and Q&A commands.

use crate::terminal::{Mode, TermFrontend};
use anyhow::Result;
use clap::Args;
use client::Transport;
use controller::ToolkitController;
use std::path::PathBuf;

/// Score a resume against a job description.
#[derive(Args, Debug)]
pub struct Match {
    /// Resume file (.pdf, .docx, .png, .jpg, .jpeg).
    #[arg(long)]
    pub resume: PathBuf,
    /// Job description text.
    #[arg(long)]
    pub job: String,
}

impl Match {
    /// Run the match with progress and print the score.
    pub async fn run(self, transport: impl Transport) -> Result<()> {
        let mut ctl = ToolkitController::new(transport, TermFrontend::new(Mode::Inline));
        if ctl.run_match(Some(self.resume.as_path()), &self.job).await.is_none() {
            anyhow::bail!("match did not complete");
        }
        ctl.frontend().print(ctl.state());
        Ok(())
    }
}

/// Ask a question about a resume.
#[derive(Args, Debug)]
pub struct Qa {
    /// Resume file (.pdf, .docx, .png, .jpg, .jpeg).
    #[arg(long)]
    pub resume: PathBuf,
    /// Question to ask.
    #[arg(long)]
    pub question: String,
}

impl Qa {
    /// Run the question with progress and print the answer.
    pub async fn run(self, transport: impl Transport) -> Result<()> {
        let mut ctl = ToolkitController::new(transport, TermFrontend::new(Mode::Inline));
        if ctl.run_qa(Some(self.resume.as_path()), &self.question).await.is_none() {
            anyhow::bail!("question did not complete");
        }
        ctl.frontend().print(ctl.state());
        Ok(())
    }
}
