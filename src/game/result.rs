//! Summary of a finished game

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
        })
    }
}

/// Result of a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub word: String,
    pub attempts: usize,
    /// Whole seconds from first render to final submission
    pub duration_secs: u64,
    pub finished_at: DateTime<Utc>,
}

impl GameResult {
    #[must_use]
    pub fn new(outcome: Outcome, word: &str, attempts: usize, elapsed: Duration) -> Self {
        Self {
            outcome,
            word: word.to_string(),
            attempts,
            duration_secs: elapsed.as_secs(),
            finished_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win)
    }
}
