//! Error types for the quiz core.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure to fetch or parse a card deck, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Deck error: {} at {}:{}", message, file, line)]
pub struct DeckError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DeckError {
    /// Creates a new deck error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for DeckError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for DeckError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed deck: {}", err))
    }
}

impl From<reqwest::Error> for DeckError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Fetch failed: {}", err))
    }
}

/// Input that the quiz cannot accept in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The card has already been committed and accepts no further input.
    #[display("Card already committed {}", _0)]
    AlreadyCommitted(crate::Direction),

    /// The previous card is still leaving the table.
    #[display("Card is still exiting")]
    CardExiting,

    /// The session is over.
    #[display("Session is finished")]
    SessionFinished,
}

impl std::error::Error for InputError {}
