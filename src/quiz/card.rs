//! Core domain types for the quiz: cards and swipe directions.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The two ways a card can leave the table.
///
/// `Right` affirms the statement ("true"), `Left` rejects it ("false").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Reject: the statement is false.
    Left,
    /// Affirm: the statement is true.
    Right,
}

impl Direction {
    /// Returns the direction that answers a statement with the given truth value.
    pub fn answering(is_true: bool) -> Self {
        if is_true { Self::Right } else { Self::Left }
    }

    /// Returns `1.0` for `Right` and `-1.0` for `Left`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// What a card asks the player to judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statement {
    /// Plain text statement.
    Text(String),
    /// Statement written in TeX math markup.
    Tex(String),
}

impl Statement {
    /// Returns the raw statement content.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(s) | Self::Tex(s) => s,
        }
    }

    /// Returns true if the statement needs math rendering.
    pub fn is_math(&self) -> bool {
        matches!(self, Self::Tex(_))
    }
}

/// A single true/false flashcard.
///
/// Cards are immutable once loaded. Deserialization accepts the deck file
/// format: `text` or `tex` for the statement (`tex` wins when both exist),
/// `isTrue` for the truth flag, and optional `rule`, `hint_tex` and
/// `example_tex` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    statement: Statement,
    is_true: bool,
    rule: Option<String>,
    hint: Option<String>,
    example: Option<String>,
}

impl Card {
    /// Creates a card with no rule tag, hint or example.
    pub fn new(statement: Statement, is_true: bool) -> Self {
        Self {
            statement,
            is_true,
            rule: None,
            hint: None,
            example: None,
        }
    }

    /// Sets the rule tag.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Sets the hint revealed after a miss.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the worked example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Returns the direction that answers this card correctly.
    pub fn answer(&self) -> Direction {
        Direction::answering(self.is_true)
    }
}

/// Wire shape of a card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tex: Option<String>,
    #[serde(rename = "isTrue")]
    is_true: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(default, alias = "hint", skip_serializing_if = "Option::is_none")]
    hint_tex: Option<String>,
    #[serde(default, alias = "example", skip_serializing_if = "Option::is_none")]
    example_tex: Option<String>,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let statement = match (raw.tex, raw.text) {
            (Some(tex), _) => Statement::Tex(tex),
            (None, Some(text)) => Statement::Text(text),
            (None, None) => return Err("card has neither `text` nor `tex`".to_string()),
        };
        Ok(Self {
            statement,
            is_true: raw.is_true,
            rule: raw.rule.filter(|r| !r.trim().is_empty()),
            hint: raw.hint_tex.filter(|h| !h.trim().is_empty()),
            example: raw.example_tex.filter(|e| !e.trim().is_empty()),
        })
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        let (text, tex) = match card.statement {
            Statement::Text(s) => (Some(s), None),
            Statement::Tex(s) => (None, Some(s)),
        };
        Self {
            text,
            tex,
            is_true: card.is_true,
            rule: card.rule,
            hint_tex: card.hint,
            example_tex: card.example,
        }
    }
}
