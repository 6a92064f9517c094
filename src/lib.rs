//! Swipe Quiz library - true/false flashcards answered by swiping
//!
//! Cards carrying a true/false statement are dealt one at a time. Dragging a
//! card far enough right affirms it, far enough left rejects it; two buttons
//! do the same without a drag. Every answer is judged once, score and streak
//! are kept, and a summary closes the session.
//!
//! # Architecture
//!
//! - **Deck**: fetch, Fisher–Yates shuffle, truncate to the session size
//! - **Presenter**: card text, answer direction and feedback per [`Presentation`]
//! - **Gesture**: drag interpretation for the card on top
//! - **Judge / Session**: scoring and a typestate cursor over the deck
//! - **Game**: event-driven loop reporting to a [`QuizView`]
//!
//! # Example
//!
//! ```no_run
//! use swipe_quiz::{DeckLoader, DeckSource, QuizConfig, QuizGame, QuizInput, QuizView};
//! use std::time::Instant;
//!
//! # async fn example(view: &mut dyn QuizView) -> anyhow::Result<()> {
//! let config = QuizConfig::default();
//! let loader = DeckLoader::new(DeckSource::parse("cards.json"), *config.session_size());
//! let deck = loader.load(&mut rand::rng()).await?;
//!
//! let mut game = QuizGame::start(deck, config.presenter(), config.timing(), view);
//! game.handle_input(QuizInput::Affirm, Instant::now(), view)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod quiz;
mod quiz_config;

// Crate-level exports - Configuration
pub use quiz_config::{ConfigError, PointerScale, QuizConfig};

// Crate-level exports - Cards and decks
pub use quiz::{
    Card, Deck, DeckError, DeckLoader, DeckSource, Direction, SESSION_SIZE, Statement,
    fisher_yates, parse_cards,
};

// Crate-level exports - Presentation
pub use quiz::{
    CardFace, CardHandle, CardPresenter, Feedback, FeedbackStyle, Locale, MathRenderer,
    Presentation, RawMarkup, Strings, Tone, UnicodeMath,
};

// Crate-level exports - Gestures
pub use quiz::{GestureConfig, GestureEvent, GestureInterpreter, GesturePhase, Point, Visual};

// Crate-level exports - Judging and sessions
pub use quiz::{
    Outcome, STREAK_BADGE_MIN, SessionFinished, SessionJudged, SessionPresenting, SessionState,
    SessionStep, Summary, judge,
};

// Crate-level exports - Game loop
pub use quiz::{
    ExitProgress, GameTiming, InputError, InputOutcome, Progress, QuizGame, QuizInput, QuizView,
    Tick,
};
