//! State of the one-shot match and Q&A tools.

use crate::progress::ProgressTrack;

/// Which tool is running or was last run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Resume against job description scoring.
    Match,
    /// Question answering over a resume.
    Qa,
}

/// Band of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// 40 to 59.
    Fair,
    /// Below 40.
    Poor,
}

impl Verdict {
    /// Band a 0–100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Verdict::Excellent
        } else if score >= 60.0 {
            Verdict::Good
        } else if score >= 40.0 {
            Verdict::Fair
        } else {
            Verdict::Poor
        }
    }

    /// Sentence shown under the score.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Excellent => {
                "Excellent Match! This candidate is highly suitable for the position."
            }
            Verdict::Good => "Good Match! This candidate has strong potential for the role.",
            Verdict::Fair => {
                "Fair Match. The candidate has some relevant skills but may need development."
            }
            Verdict::Poor => "Low Match. This candidate may not be the best fit for this position.",
        }
    }
}

/// Result of a finished tool run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Match score in `[0, 100]` and its band.
    Match {
        /// The score.
        score: f64,
        /// The band.
        verdict: Verdict,
    },
    /// Answer to a resume question.
    Answer(String),
}

/// Toolkit screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolkit {
    /// Tool currently or last run.
    pub tool: Option<Tool>,
    /// Simulated progress, shown while a run is in flight.
    pub progress: Option<ProgressTrack>,
    /// Result of the last successful run.
    pub outcome: Option<Outcome>,
}

impl Toolkit {
    /// Clear progress and result, as switching tools does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
