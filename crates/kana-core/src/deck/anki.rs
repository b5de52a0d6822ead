use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::card::parse_note_fields;
use super::{Card, CardProvider, DeckError};
use crate::unicode::is_hiragana_reading;

/// Nested deck names are stored with U+001F between levels; Anki shows `::`.
const DECK_NAME_SEPARATOR: char = '\x1f';

/// A row of the collection's `decks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckInfo {
    pub id: i64,
    /// Full name with levels joined by `::`.
    pub name: String,
    pub mtime_secs: i64,
    pub usn: i64,
}

/// Read-only view of an Anki collection (`collection.anki2`).
pub struct AnkiCollection {
    conn: Connection,
    max_cards: usize,
}

impl AnkiCollection {
    /// Open an existing collection file. The file is never created or written.
    pub fn open(path: &Path, max_cards: usize) -> Result<Self, DeckError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!(path = %path.display(), "opened Anki collection");
        Ok(Self::from_connection(conn, max_cards))
    }

    pub fn from_connection(conn: Connection, max_cards: usize) -> Self {
        Self { conn, max_cards }
    }

    pub fn decks(&self) -> Result<Vec<DeckInfo>, DeckError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, mtime_secs, usn FROM decks ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut decks = Vec::new();
        for row in rows {
            let (id, name, mtime_secs, usn) = row?;
            let Some(name) = name else {
                continue;
            };
            decks.push(DeckInfo {
                id,
                name: name.replace(DECK_NAME_SEPARATOR, "::"),
                mtime_secs,
                usn,
            });
        }
        Ok(decks)
    }

    /// Find a deck by its full name, written with `::` between levels.
    pub fn find_deck(&self, name: &str) -> Result<Option<DeckInfo>, DeckError> {
        Ok(self.decks()?.into_iter().find(|d| d.name == name))
    }

    /// Up to `limit` cards of a deck, skipping notes that lack a word,
    /// reading or meaning.
    pub fn cards_in_deck(&self, deck_id: i64, limit: usize) -> Result<Vec<Card>, DeckError> {
        let mut stmt = self.conn.prepare(
            "SELECT n.id, n.flds, c.id \
             FROM cards c \
             JOIN notes n ON c.nid = n.id \
             WHERE c.did = ?1 \
             ORDER BY c.id \
             LIMIT ?2",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![deck_id, limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut cards = Vec::new();
        for row in rows {
            let (note_id, fields, card_id) = row?;
            let Some(fields) = fields else {
                continue;
            };
            match parse_note_fields(&fields) {
                Some(card) => {
                    if !is_hiragana_reading(&card.reading) {
                        warn!(card_id, reading = %card.reading, "reading is not plain hiragana");
                    }
                    debug!(card_id, note_id, word = %card.word, "extracted card");
                    cards.push(card);
                }
                None => warn!(card_id, note_id, "skipping note with missing fields"),
            }
        }

        info!(deck_id, count = cards.len(), "extracted cards");
        Ok(cards)
    }
}

impl CardProvider for AnkiCollection {
    fn cards(&self, deck_name: &str) -> Result<Vec<Card>, DeckError> {
        let deck = self
            .find_deck(deck_name)?
            .ok_or_else(|| DeckError::DeckNotFound(deck_name.to_string()))?;
        self.cards_in_deck(deck.id, self.max_cards)
    }
}
