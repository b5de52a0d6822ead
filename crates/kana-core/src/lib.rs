//! Core of the kana typing game: romaji → hiragana conversion, vocabulary
//! decks read from Anki collections, and game settings.

pub mod deck;
pub mod romaji;
pub mod settings;
pub mod unicode;
