//! Simulated multi-step progress for the toolkit flows.
//!
//! The track is cosmetic: it advances on a fixed clock and says nothing about
//! how far the real request has got.

use std::time::Duration;

/// Time spent on each step.
pub const STEP_DURATION: Duration = Duration::from_millis(800);

/// Step labels shared by the match and Q&A flows.
pub const STEPS: [&str; 4] = [
    "Uploading resume",
    "Extracting text",
    "Analyzing",
    "Complete",
];

/// Display state of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Not reached yet.
    Pending,
    /// The step being shown.
    Active,
    /// Already passed.
    Completed,
}

/// A fixed sequence of steps with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTrack {
    steps: &'static [&'static str],
    current: Option<usize>,
}

impl Default for ProgressTrack {
    fn default() -> Self {
        Self::new(&STEPS)
    }
}

impl ProgressTrack {
    /// A track over `steps`, none of them started.
    pub fn new(steps: &'static [&'static str]) -> Self {
        Self {
            steps,
            current: None,
        }
    }

    /// Move to the next step. Returns `false` once the last step is active.
    pub fn advance(&mut self) -> bool {
        let next = self.current.map_or(0, |i| i + 1);
        if next >= self.steps.len() {
            return false;
        }
        self.current = Some(next);
        true
    }

    /// Percentage shown on the bar: `(i + 1) / n * 100` for active step `i`.
    pub fn percent(&self) -> u8 {
        match self.current {
            None => 0,
            Some(i) => ((i + 1) * 100 / self.steps.len()) as u8,
        }
    }

    /// Label of the active step.
    pub fn label(&self) -> Option<&'static str> {
        self.current.map(|i| self.steps[i])
    }

    /// Whether the last step is active.
    pub fn is_finished(&self) -> bool {
        self.current.is_some_and(|i| i + 1 == self.steps.len())
    }

    /// Every step with its status.
    pub fn steps(&self) -> impl Iterator<Item = (&'static str, StepStatus)> + '_ {
        self.steps.iter().enumerate().map(|(i, name)| {
            let status = match self.current {
                Some(c) if i < c => StepStatus::Completed,
                Some(c) if i == c => StepStatus::Active,
                _ => StepStatus::Pending,
            };
            (*name, status)
        })
    }

    /// Total time to run through every step.
    pub fn duration(&self) -> Duration {
        STEP_DURATION * self.steps.len() as u32
    }
}
