//! Match and Q&A flows.
//!
//! Each run is two tracks joined together: the real request and a cosmetic
//! progress animation stepping every [`STEP_DURATION`]. The result is applied
//! once both are done.

use crate::Frontend;
use client::{Transport, Upload};
use ncore::{ChatState, Outcome, Panel, ProgressTrack, STEP_DURATION, Tool, Verdict, upload};
use std::{future::Future, path::Path};

/// Alert when a match run is missing input.
pub const MATCH_INPUT_REQUIRED: &str = "Please select a resume file and enter a job description";
/// Alert when a Q&A run is missing input.
pub const QA_INPUT_REQUIRED: &str = "Please select a resume file and enter a question";

/// Score a resume against a job description on `state`.
pub async fn run_match<T: Transport, F: Frontend>(
    transport: &T,
    frontend: &mut F,
    state: &mut ChatState,
    resume: Option<&Path>,
    job_description: &str,
) -> Option<Outcome> {
    let job_description = job_description.trim();
    let Some(resume) = resume.filter(|_| !job_description.is_empty()) else {
        frontend.alert(MATCH_INPUT_REQUIRED);
        return None;
    };
    let file = read(frontend, resume).await?;

    let score = run(
        frontend,
        state,
        Tool::Match,
        transport.match_resume(file, job_description),
    )
    .await?;
    let score = score.clamp(0.0, 100.0);
    tracing::info!("match score {score:.0}");
    let outcome = Outcome::Match {
        score,
        verdict: Verdict::from_score(score),
    };
    state.toolkit.outcome = Some(outcome.clone());
    frontend.render(state);
    Some(outcome)
}

/// Ask a question about a resume on `state`.
pub async fn run_qa<T: Transport, F: Frontend>(
    transport: &T,
    frontend: &mut F,
    state: &mut ChatState,
    resume: Option<&Path>,
    question: &str,
) -> Option<Outcome> {
    let question = question.trim();
    let Some(resume) = resume.filter(|_| !question.is_empty()) else {
        frontend.alert(QA_INPUT_REQUIRED);
        return None;
    };
    let file = read(frontend, resume).await?;

    let answer = run(frontend, state, Tool::Qa, transport.ask(file, question)).await?;
    let outcome = Outcome::Answer(answer);
    state.toolkit.outcome = Some(outcome.clone());
    frontend.render(state);
    Some(outcome)
}

async fn read<F: Frontend>(frontend: &mut F, path: &Path) -> Option<Upload> {
    if !upload::is_accepted(path) {
        frontend.alert(crate::assistant::UNSUPPORTED_FILE);
        return None;
    }
    match Upload::read(path).await {
        Ok(file) => Some(file),
        Err(err) => {
            frontend.alert(&format!("Error: {err}"));
            None
        }
    }
}

async fn run<F: Frontend, R>(
    frontend: &mut F,
    state: &mut ChatState,
    tool: Tool,
    request: impl Future<Output = client::Result<R>>,
) -> Option<R> {
    state.toolkit.reset();
    state.toolkit.tool = Some(tool);
    state.ui.begin(None);

    let (result, ()) = tokio::join!(request, animate(frontend, state));

    state.toolkit.progress = None;
    state.ui.finish();
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("{tool:?} failed: {err}");
            frontend.render(state);
            frontend.alert(&format!("Error: {err}"));
            None
        }
    }
}

async fn animate<F: Frontend>(frontend: &mut F, state: &mut ChatState) {
    let mut track = ProgressTrack::default();
    while track.advance() {
        state.toolkit.progress = Some(track.clone());
        frontend.render(state);
        tokio::time::sleep(STEP_DURATION).await;
    }
}

/// Drives a standalone toolkit screen.
pub struct ToolkitController<T, F> {
    transport: T,
    frontend: F,
    state: ChatState,
}

impl<T: Transport, F: Frontend> ToolkitController<T, F> {
    /// Create a controller on the toolkit screen.
    pub fn new(transport: T, frontend: F) -> Self {
        let mut state = ChatState::dashboard();
        state.panel = Panel::Toolkit;
        Self {
            transport,
            frontend,
            state,
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

    /// See [`run_match`].
    pub async fn run_match(
        &mut self,
        resume: Option<&Path>,
        job_description: &str,
    ) -> Option<Outcome> {
        run_match(
            &self.transport,
            &mut self.frontend,
            &mut self.state,
            resume,
            job_description,
        )
        .await
    }

    /// See [`run_qa`].
    pub async fn run_qa(&mut self, resume: Option<&Path>, question: &str) -> Option<Outcome> {
        run_qa(
            &self.transport,
            &mut self.frontend,
            &mut self.state,
            resume,
            question,
        )
        .await
    }
}
