//! Vocabulary cards and the Anki collection they are read from.

mod anki;
mod card;


use serde::Serialize;

pub use anki::{AnkiCollection, DeckInfo};
pub use card::{extract_first_meaning, parse_note_fields, FIELD_SEPARATOR};

/// One vocabulary entry: the word as written, its hiragana reading, and a
/// short meaning shown once the word is typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub word: String,
    pub reading: String,
    pub meaning: String,
}

impl Card {
    pub fn new(word: &str, reading: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("deck not found: {0}")]
    DeckNotFound(String),
    #[error("deck {0} has no usable cards")]
    Empty(String),
}

/// Source of cards for a named deck.
pub trait CardProvider {
    fn cards(&self, deck_name: &str) -> Result<Vec<Card>, DeckError>;
}

/// Cards for a game round. Unlike `CardProvider::cards`, a deck without a
/// single usable card is an error.
pub fn load_playable(provider: &dyn CardProvider, deck_name: &str) -> Result<Vec<Card>, DeckError> {
    let cards = provider.cards(deck_name)?;
    if cards.is_empty() {
        return Err(DeckError::Empty(deck_name.to_string()));
    }
    Ok(cards)
}
