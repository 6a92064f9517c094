//! Phase-specific typestate structs for a quiz session.
//!
//! A session alternates between [`SessionPresenting`] (a card is waiting for
//! an answer) and [`SessionJudged`] (the answer is in, the cursor has not
//! moved yet) until it becomes [`SessionFinished`]. Each transition consumes
//! the previous phase, so a card cannot be judged twice and the cursor
//! cannot move without a judgment.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::card::{Card, Direction};
use super::deck::Deck;
use super::judge::{Outcome, SessionState, judge};
use super::presenter::CardHandle;

/// Minimum best streak that earns the streak badge.
pub const STREAK_BADGE_MIN: u32 = 3;

// ─────────────────────────────────────────────────────────────
//  Presenting Phase
// ─────────────────────────────────────────────────────────────

/// Session waiting for an answer to the card at the cursor.
///
/// The cursor always points at a card of the deck.
#[derive(Debug, Clone)]
pub struct SessionPresenting {
    deck: Deck,
    state: SessionState,
}

impl SessionPresenting {
    /// The card at the cursor.
    pub fn current_card(&self) -> &Card {
        &self.deck.cards()[*self.state.cursor()]
    }

    /// Session counters.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Judges the current card (consumes presenting, returns judged).
    #[instrument(skip(self, handle), fields(cursor = self.state.cursor()))]
    pub fn judge(self, handle: &CardHandle, committed: Direction) -> (Outcome, SessionJudged) {
        let (outcome, state) = judge(handle, committed, self.state);
        (
            outcome,
            SessionJudged {
                deck: self.deck,
                state,
            },
        )
    }
}

// ─────────────────────────────────────────────────────────────
//  Judged Phase
// ─────────────────────────────────────────────────────────────

/// Session whose current card has been judged but not yet discarded.
#[derive(Debug, Clone)]
pub struct SessionJudged {
    deck: Deck,
    state: SessionState,
}

impl SessionJudged {
    /// Session counters.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves to the next card, or finishes when the deck is exhausted.
    #[instrument(skip(self), fields(cursor = self.state.cursor()))]
    pub fn advance(self) -> SessionStep {
        SessionStep::from_parts(self.deck, self.state.advanced())
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Session that has run out of cards.
///
/// There is no way back to a playable phase: playing again means building a
/// new session from a freshly loaded deck.
#[derive(Debug, Clone, Default)]
pub struct SessionFinished {
    deck_len: usize,
    state: SessionState,
}

impl SessionFinished {
    /// Session counters.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// End-of-session statistics.
    #[instrument(skip(self))]
    pub fn summary(&self, badge_min: u32) -> Summary {
        Summary::new(*self.state.score(), self.deck_len, *self.state.best_streak(), badge_min)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

/// Result of starting or advancing a session.
#[derive(Debug)]
pub enum SessionStep {
    /// Another card to answer.
    Presenting(SessionPresenting),
    /// No cards left.
    Finished(SessionFinished),
}

impl SessionStep {
    /// Starts a session over `deck`. An empty deck finishes immediately.
    #[instrument(skip(deck), fields(cards = deck.len()))]
    pub fn start(deck: Deck) -> Self {
        Self::from_parts(deck, SessionState::new())
    }

    fn from_parts(deck: Deck, state: SessionState) -> Self {
        if *state.cursor() >= deck.len() {
            info!(score = state.score(), cards = deck.len(), "Session finished");
            Self::Finished(SessionFinished {
                deck_len: deck.len(),
                state,
            })
        } else {
            Self::Presenting(SessionPresenting { deck, state })
        }
    }
}

/// Final numbers shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Summary {
    score: u32,
    total: usize,
    accuracy: u32,
    best_streak: u32,
    streak_badge: bool,
}

impl Summary {
    /// Computes accuracy as `round(score / total * 100)`, zero for an empty deck.
    #[instrument]
    pub fn new(score: u32, total: usize, best_streak: u32, badge_min: u32) -> Self {
        let accuracy = if total == 0 {
            0
        } else {
            (f64::from(score) / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            accuracy,
            best_streak,
            streak_badge: best_streak >= badge_min,
        }
    }
}
