//! The quiz loop: input in, judgments and view updates out.
//!
//! Single-threaded and clock-free: callers pass the current [`Instant`] with
//! every input and with [`QuizGame::tick`], which completes a card's exit
//! once the exit delay has elapsed.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, instrument};

use super::card::Direction;
use super::deck::{Deck, DeckLoader};
use super::error::{DeckError, InputError};
use super::gesture::{GestureEvent, Point, Visual};
use super::judge::{Outcome, SessionState};
use super::presenter::{CardHandle, CardPresenter};
use super::session::{
    STREAK_BADGE_MIN, SessionFinished, SessionJudged, SessionPresenting, SessionStep, Summary,
};
use super::view::{Progress, QuizView};

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizInput {
    /// Pointer pressed on the current card.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// "True" button.
    Affirm,
    /// "False" button.
    Reject,
}

/// What an input did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Nothing changed.
    Ignored,
    /// A drag started.
    Started,
    /// The card moved.
    Moved(Visual),
    /// A short drag returned the card to rest.
    SnappedBack,
    /// The card was answered and judged.
    Judged(Outcome),
}

/// What a clock tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is pending.
    Idle,
    /// A card is still leaving the table.
    Waiting,
    /// The next card was presented.
    NextCard,
    /// The last card left and the session finished.
    Finished,
}

/// Timing and threshold settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    /// How long an answered card takes to leave before the next one appears.
    pub exit_delay: Duration,
    /// Best streak needed for the summary badge.
    pub streak_badge_min: u32,
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_millis(280),
            streak_badge_min: STREAK_BADGE_MIN,
        }
    }
}

/// An answered card on its way off the table.
#[derive(Debug, Clone)]
struct ExitingCard {
    handle: CardHandle,
    direction: Direction,
    started: Instant,
}

/// Snapshot of an exit animation.
#[derive(Debug, Clone, Copy)]
pub struct ExitProgress<'a> {
    /// The card leaving the table.
    pub handle: &'a CardHandle,
    /// Side it leaves toward.
    pub direction: Direction,
    /// Fraction of the exit delay elapsed, in `[0, 1]`.
    pub progress: f32,
}

#[derive(Debug)]
enum GamePhase {
    Awaiting {
        session: SessionPresenting,
        card: CardHandle,
    },
    Exiting {
        session: SessionJudged,
        card: ExitingCard,
    },
    Finished(SessionFinished),
}

/// A running quiz session.
#[derive(Debug)]
pub struct QuizGame {
    presenter: CardPresenter,
    timing: GameTiming,
    deck_len: usize,
    phase: GamePhase,
}

impl QuizGame {
    /// Starts a session over `deck` and presents the first card.
    #[instrument(skip_all, fields(cards = deck.len()))]
    pub fn start(
        deck: Deck,
        presenter: CardPresenter,
        timing: GameTiming,
        view: &mut dyn QuizView,
    ) -> Self {
        info!("Starting quiz session");
        let deck_len = deck.len();
        let mut game = Self {
            presenter,
            timing,
            deck_len,
            phase: GamePhase::Finished(SessionFinished::default()),
        };
        game.phase = game.enter(SessionStep::start(deck), view);
        game
    }

    /// Discards this session entirely and starts a new one from a freshly
    /// loaded deck.
    ///
    /// Nothing carries over: score, streaks and history are dropped with
    /// `self`. A load failure is returned and no session is started.
    #[instrument(skip_all)]
    pub async fn restart<R: Rng + ?Sized>(
        self,
        loader: &DeckLoader,
        rng: &mut R,
        view: &mut dyn QuizView,
    ) -> Result<Self, DeckError> {
        info!("Reloading quiz session");
        let Self {
            presenter, timing, ..
        } = self;
        let deck = loader.load(rng).await?;
        Ok(Self::start(deck, presenter, timing, view))
    }

    /// Applies one input event.
    ///
    /// Input is refused while the previous card is exiting and after the
    /// session has finished.
    #[instrument(skip(self, view))]
    pub fn handle_input(
        &mut self,
        input: QuizInput,
        now: Instant,
        view: &mut dyn QuizView,
    ) -> Result<InputOutcome, InputError> {
        let card = match &mut self.phase {
            GamePhase::Awaiting { card, .. } => card,
            GamePhase::Exiting { .. } => return Err(InputError::CardExiting),
            GamePhase::Finished(_) => return Err(InputError::SessionFinished),
        };
        let gesture = card.gesture_mut();
        let event = match input {
            QuizInput::PointerDown(point) => gesture.pointer_down(point)?,
            QuizInput::PointerMove(point) => gesture.pointer_move(point)?,
            QuizInput::PointerUp => gesture.pointer_up()?,
            QuizInput::Affirm => gesture.commit(Direction::Right)?,
            QuizInput::Reject => gesture.commit(Direction::Left)?,
        };

        match event {
            GestureEvent::Ignored => Ok(InputOutcome::Ignored),
            GestureEvent::Started => Ok(InputOutcome::Started),
            GestureEvent::Moved(visual) => {
                view.show_drag(&visual);
                Ok(InputOutcome::Moved(visual))
            }
            GestureEvent::SnappedBack => {
                view.show_drag(&Visual::default());
                Ok(InputOutcome::SnappedBack)
            }
            GestureEvent::Committed(direction) => {
                let outcome = self.commit_current(direction, now, view)?;
                Ok(InputOutcome::Judged(outcome))
            }
        }
    }

    /// Completes a pending exit once the exit delay has elapsed.
    #[instrument(skip(self, view))]
    pub fn tick(&mut self, now: Instant, view: &mut dyn QuizView) -> Tick {
        match self.take_phase() {
            GamePhase::Exiting { session, card }
                if now.saturating_duration_since(card.started) >= self.timing.exit_delay =>
            {
                debug!(index = card.handle.index(), "Card discarded");
                self.phase = self.enter(session.advance(), view);
                match self.phase {
                    GamePhase::Finished(_) => Tick::Finished,
                    _ => Tick::NextCard,
                }
            }
            other => {
                let tick = match other {
                    GamePhase::Exiting { .. } => Tick::Waiting,
                    _ => Tick::Idle,
                };
                self.phase = other;
                tick
            }
        }
    }

    /// Current counters.
    pub fn state(&self) -> SessionState {
        match &self.phase {
            GamePhase::Awaiting { session, .. } => session.state(),
            GamePhase::Exiting { session, .. } => session.state(),
            GamePhase::Finished(finished) => finished.state(),
        }
    }

    /// Number of cards in the session.
    pub fn deck_len(&self) -> usize {
        self.deck_len
    }

    /// The interactive card, if one is waiting for an answer.
    pub fn current_card(&self) -> Option<&CardHandle> {
        match &self.phase {
            GamePhase::Awaiting { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The exiting card and how far along its exit is.
    pub fn exit_progress(&self, now: Instant) -> Option<ExitProgress<'_>> {
        let GamePhase::Exiting { card, .. } = &self.phase else {
            return None;
        };
        let elapsed = now.saturating_duration_since(card.started).as_secs_f32();
        let total = self.timing.exit_delay.as_secs_f32();
        let progress = if total > 0.0 {
            (elapsed / total).min(1.0)
        } else {
            1.0
        };
        Some(ExitProgress {
            handle: &card.handle,
            direction: card.direction,
            progress,
        })
    }

    /// End-of-session statistics, once finished.
    pub fn summary(&self) -> Option<Summary> {
        match &self.phase {
            GamePhase::Finished(finished) => Some(finished.summary(self.timing.streak_badge_min)),
            _ => None,
        }
    }

    /// Returns true once every card has been answered.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    /// The presenter used for cards and feedback.
    pub fn presenter(&self) -> &CardPresenter {
        &self.presenter
    }

    fn take_phase(&mut self) -> GamePhase {
        std::mem::replace(
            &mut self.phase,
            GamePhase::Finished(SessionFinished::default()),
        )
    }

    /// Builds the phase for a session step and tells the view about it.
    fn enter(&self, step: SessionStep, view: &mut dyn QuizView) -> GamePhase {
        match step {
            SessionStep::Presenting(session) => {
                let state = session.state();
                let card = self.presenter.present(*state.cursor(), session.current_card());
                view.render_card(&card);
                view.show_progress(Progress::new(*state.score(), *state.cursor(), self.deck_len));
                GamePhase::Awaiting { session, card }
            }
            SessionStep::Finished(finished) => {
                let summary = finished.summary(self.timing.streak_badge_min);
                info!(
                    score = summary.score(),
                    accuracy = summary.accuracy(),
                    best_streak = summary.best_streak(),
                    "Session summary"
                );
                view.show_summary(&summary);
                GamePhase::Finished(finished)
            }
        }
    }

    /// Judges the awaiting card and starts its exit.
    fn commit_current(
        &mut self,
        direction: Direction,
        now: Instant,
        view: &mut dyn QuizView,
    ) -> Result<Outcome, InputError> {
        let (session, card) = match self.take_phase() {
            GamePhase::Awaiting { session, card } => (session, card),
            other => {
                self.phase = other;
                return Err(InputError::CardExiting);
            }
        };
        let (outcome, judged) = session.judge(&card, direction);
        let feedback = self.presenter.feedback(&card, direction, outcome);
        view.show_feedback(&feedback);

        let state = judged.state();
        view.show_progress(Progress::new(*state.score(), state.cursor() + 1, self.deck_len));
        view.show_exit(direction);

        self.phase = GamePhase::Exiting {
            session: judged,
            card: ExitingCard {
                handle: card,
                direction,
                started: now,
            },
        };
        Ok(outcome)
    }
}
