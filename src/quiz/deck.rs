//! Deck loading: fetch, shuffle, truncate.

use std::path::PathBuf;

use derive_more::Display;
use rand::Rng;
use tracing::{debug, info, instrument};

use super::card::Card;
use super::error::DeckError;

/// Number of cards played in one session.
pub const SESSION_SIZE: usize = 10;

/// Where a deck's card list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DeckSource {
    /// A JSON file on disk.
    #[display("{}", _0.display())]
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    #[display("{}", _0)]
    Url(String),
}

impl DeckSource {
    /// Interprets `location` as a URL when it has an http(s) scheme, else as a path.
    #[instrument]
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Reads the raw deck document.
    #[instrument(skip(self), fields(source = %self))]
    async fn fetch(&self) -> Result<String, DeckError> {
        match self {
            Self::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                DeckError::new(format!("Failed to read {}: {}", path.display(), e))
            }),
            Self::Url(url) => {
                let body = reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                Ok(body)
            }
        }
    }
}

/// A shuffled, truncated sequence of cards for one session.
///
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Shuffles `cards` and keeps at most `session_size` of them.
    #[instrument(skip(cards, rng), fields(available = cards.len()))]
    pub fn deal<R: Rng + ?Sized>(mut cards: Vec<Card>, session_size: usize, rng: &mut R) -> Self {
        fisher_yates(&mut cards, rng);
        cards.truncate(session_size);
        debug!(dealt = cards.len(), "Deck dealt");
        Self { cards }
    }

    /// Builds a deck from cards in the given order, without shuffling.
    pub fn from_ordered(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the session.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in play order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// In-place Fisher–Yates shuffle.
///
/// Walks from the last index down to 1, swapping each slot with one drawn
/// uniformly from `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Parses a deck document into its full card list.
#[instrument(skip(document), fields(bytes = document.len()))]
pub fn parse_cards(document: &str) -> Result<Vec<Card>, DeckError> {
    let cards: Vec<Card> = serde_json::from_str(document)?;
    debug!(count = cards.len(), "Parsed cards");
    Ok(cards)
}

/// Loads session decks from a [`DeckSource`].
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct DeckLoader {
    source: DeckSource,
    session_size: usize,
}

impl DeckLoader {
    /// Creates a loader that deals `session_size` cards per session.
    #[instrument]
    pub fn new(source: DeckSource, session_size: usize) -> Self {
        Self {
            source,
            session_size,
        }
    }

    /// Fetches and parses the full card list without shuffling.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch_cards(&self) -> Result<Vec<Card>, DeckError> {
        let document = self.source.fetch().await?;
        parse_cards(&document)
    }

    /// Fetches, shuffles and truncates a deck for a new session.
    ///
    /// Any fetch or parse failure is returned as-is; there is no retry and no
    /// partial deck.
    #[instrument(skip(self, rng), fields(source = %self.source))]
    pub async fn load<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deck, DeckError> {
        let cards = self.fetch_cards().await?;
        let deck = Deck::deal(cards, self.session_size, rng);
        info!(cards = deck.len(), "Deck loaded");
        Ok(deck)
    }
}
