//! Card presentation: display content, answer direction and feedback text.
//!
//! All three visual variants of the quiz share one presenter. They differ
//! only in [`Presentation`]: language, whether math markup is rendered, and
//! which [`FeedbackStyle`] labels an answer.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::card::{Card, Direction, Statement};
use super::gesture::{GestureConfig, GestureInterpreter};
use super::judge::Outcome;
use super::locale::Locale;
use super::math::{MathRenderer, RawMarkup, UnicodeMath};

/// How an answer is labelled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FeedbackStyle {
    /// Label by the direction chosen ("True" / "False"); the hint shows on a
    /// left swipe.
    #[default]
    Direction,
    /// Label by correctness ("Correct" / "Wrong"); the hint shows on a miss.
    Correctness,
}

/// Presentation settings shared by every card in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    /// Display language.
    pub locale: Locale,
    /// Render TeX as Unicode; when false the markup is shown as written.
    pub math: bool,
    /// Feedback labelling.
    pub feedback: FeedbackStyle,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            math: true,
            feedback: FeedbackStyle::default(),
        }
    }
}

/// Rendered text of a card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CardFace {
    rule: String,
    statement: String,
    example: Option<String>,
    hint: Option<String>,
}

/// The interactive card currently on top of the table.
///
/// Carries the answer direction the judge compares against and the gesture
/// state of the card.
#[derive(Debug, Clone, Getters)]
pub struct CardHandle {
    index: usize,
    face: CardFace,
    answer: Direction,
    gesture: GestureInterpreter,
}

impl CardHandle {
    /// Mutable access to the card's gesture state.
    pub fn gesture_mut(&mut self) -> &mut GestureInterpreter {
        &mut self.gesture
    }
}

/// Good or bad styling for feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Positive styling.
    Good,
    /// Negative styling.
    Bad,
}

/// Feedback shown after an answer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Feedback {
    label: String,
    tone: Tone,
    hint: Option<String>,
}

/// Builds card handles and feedback according to a [`Presentation`].
#[derive(Debug)]
pub struct CardPresenter {
    presentation: Presentation,
    gesture: GestureConfig,
    renderer: Box<dyn MathRenderer>,
}

impl CardPresenter {
    /// Creates a presenter using the renderer implied by `presentation.math`.
    #[instrument]
    pub fn new(presentation: Presentation, gesture: GestureConfig) -> Self {
        let renderer: Box<dyn MathRenderer> = if presentation.math {
            Box::new(UnicodeMath)
        } else {
            Box::new(RawMarkup)
        };
        Self::with_renderer(presentation, gesture, renderer)
    }

    /// Creates a presenter with an explicit math renderer.
    #[instrument(skip(renderer))]
    pub fn with_renderer(
        presentation: Presentation,
        gesture: GestureConfig,
        renderer: Box<dyn MathRenderer>,
    ) -> Self {
        Self {
            presentation,
            gesture,
            renderer,
        }
    }

    /// Presentation settings.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Builds the handle for the card at position `index`.
    #[instrument(skip(self, card))]
    pub fn present(&self, index: usize, card: &Card) -> CardHandle {
        let strings = self.presentation.locale.strings();
        let statement = match card.statement() {
            Statement::Tex(tex) => self.renderer.render(tex),
            Statement::Text(text) => text.clone(),
        };
        let face = CardFace {
            rule: card
                .rule()
                .clone()
                .unwrap_or_else(|| strings.default_rule.to_string()),
            statement,
            example: card.example().as_deref().map(|e| self.renderer.render(e)),
            hint: card.hint().as_deref().map(|h| self.renderer.render(h)),
        };
        debug!(index, rule = %face.rule, answer = %card.answer(), "Card presented");
        CardHandle {
            index,
            face,
            answer: card.answer(),
            gesture: GestureInterpreter::new(self.gesture),
        }
    }

    /// Builds the feedback for committing `handle` toward `committed`.
    #[instrument(skip(self, handle), fields(index = handle.index))]
    pub fn feedback(&self, handle: &CardHandle, committed: Direction, outcome: Outcome) -> Feedback {
        let strings = self.presentation.locale.strings();
        let hint_line = || {
            let hint = handle
                .face
                .hint
                .as_deref()
                .unwrap_or(strings.fallback_hint);
            format!("{} {}", strings.hint_prefix, hint)
        };
        match self.presentation.feedback {
            FeedbackStyle::Direction => match committed {
                Direction::Right => Feedback {
                    label: strings.true_label.to_string(),
                    tone: Tone::Good,
                    hint: None,
                },
                Direction::Left => Feedback {
                    label: strings.false_label.to_string(),
                    tone: Tone::Bad,
                    hint: Some(hint_line()),
                },
            },
            FeedbackStyle::Correctness if *outcome.correct() => Feedback {
                label: strings.correct.to_string(),
                tone: Tone::Good,
                hint: None,
            },
            FeedbackStyle::Correctness => Feedback {
                label: strings.incorrect.to_string(),
                tone: Tone::Bad,
                hint: Some(hint_line()),
            },
        }
    }
}
