//! Judging answers and keeping score.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::card::Direction;
use super::presenter::CardHandle;

/// Counters for one session.
///
/// Passed by value into [`judge`] and returned updated, so the scoring rules
/// never touch shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct SessionState {
    cursor: usize,
    score: u32,
    current_streak: u32,
    best_streak: u32,
}

impl SessionState {
    /// A fresh session at the first card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one judged outcome to score and streaks.
    #[instrument]
    pub fn record(self, outcome: Outcome) -> Self {
        if outcome.correct {
            let current_streak = self.current_streak + 1;
            Self {
                score: self.score + 1,
                current_streak,
                best_streak: self.best_streak.max(current_streak),
                ..self
            }
        } else {
            Self {
                current_streak: 0,
                ..self
            }
        }
    }

    /// Moves the cursor to the next card.
    #[instrument]
    pub fn advanced(self) -> Self {
        Self {
            cursor: self.cursor + 1,
            ..self
        }
    }
}

/// Result of judging one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Outcome {
    correct: bool,
    committed: Direction,
}

impl Outcome {
    /// Compares a committed direction against the expected one.
    pub fn compare(committed: Direction, expected: Direction) -> Self {
        Self {
            correct: committed == expected,
            committed,
        }
    }
}

/// Judges `committed` against `handle`'s answer and returns the new state.
///
/// Correct answers add a point and extend the streak; a miss resets the
/// streak. The outcome is final: there is no retry or undo.
#[instrument(skip(handle, state), fields(index = handle.index(), answer = %handle.answer()))]
pub fn judge(handle: &CardHandle, committed: Direction, state: SessionState) -> (Outcome, SessionState) {
    let outcome = Outcome::compare(committed, *handle.answer());
    let next = state.record(outcome);
    debug!(
        correct = outcome.correct,
        score = next.score,
        streak = next.current_streak,
        "Card judged"
    );
    (outcome, next)
}
