mod card;
mod deck;
mod error;
mod game;
mod gesture;
mod judge;
mod locale;
mod math;
mod presenter;
mod session;
mod view;

pub use card::{Card, Direction, Statement};
pub use deck::{Deck, DeckLoader, DeckSource, SESSION_SIZE, fisher_yates, parse_cards};
pub use error::{DeckError, InputError};
pub use game::{ExitProgress, GameTiming, InputOutcome, QuizGame, QuizInput, Tick};
pub use gesture::{GestureConfig, GestureEvent, GestureInterpreter, GesturePhase, Point, Visual};
pub use judge::{Outcome, SessionState, judge};
pub use locale::{Locale, Strings};
pub use math::{MathRenderer, RawMarkup, UnicodeMath};
pub use presenter::{CardFace, CardHandle, CardPresenter, Feedback, FeedbackStyle, Presentation, Tone};
pub use session::{
    STREAK_BADGE_MIN, SessionFinished, SessionJudged, SessionPresenting, SessionStep, Summary,
};
pub use view::{Progress, QuizView};
