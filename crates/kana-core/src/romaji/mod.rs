//! Romaji-to-hiragana conversion engine.
//!
//! An ordered rule table (combined mora, basic mora, vowels, doubled-consonant
//! sokuon pairs) backed by a byte trie, and a converter that re-reads the
//! whole romaji input on every keystroke and resolves it by longest match
//! with local backtracking.

mod config;
mod convert;
mod table;
mod trie;

#[cfg(test)]
mod tests;

pub use config::{parse_romaji_toml, RomajiConfigError, RomajiRule};
pub use convert::{convert_romaji, convert_with, transliterate, Limits, RomajiConvertResult};
pub use table::{default_toml, INPUT_BUFFER_SIZE, MAX_ROMAJI_LENGTH};
pub use trie::{RomajiTable, TrieLookupResult};
