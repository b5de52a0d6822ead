use std::path::Path;

use unicode_width::UnicodeWidthStr;

use kana_core::deck::{AnkiCollection, CardProvider};
use kana_core::settings::settings;
use kana_core::unicode::is_hiragana_reading;

pub(crate) fn open_collection(path: &str) -> AnkiCollection {
    die!(
        AnkiCollection::open(Path::new(path), settings().deck.max_cards),
        "Error opening collection {path}: {}"
    )
}

pub fn decks_cmd(collection: &str) {
    let col = open_collection(collection);
    let decks = die!(col.decks(), "Error reading decks: {}");
    for deck in &decks {
        println!("{:>15}  {}", deck.id, deck.name);
    }
    eprintln!("{} decks", decks.len());
}

pub fn cards_cmd(collection: &str, deck: &str, json: bool) {
    let col = open_collection(collection);
    let cards = die!(col.cards(deck), "Error: {}");

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&cards), "Error: {}"));
        return;
    }

    let word_width = cards.iter().map(|c| c.word.width()).max().unwrap_or(0);
    let reading_width = cards.iter().map(|c| c.reading.width()).max().unwrap_or(0);
    for card in &cards {
        let mark = if is_hiragana_reading(&card.reading) { ' ' } else { '!' };
        println!(
            "{mark} {}{}  {}{}  {}",
            card.word,
            " ".repeat(word_width - card.word.width()),
            card.reading,
            " ".repeat(reading_width - card.reading.width()),
            card.meaning,
        );
    }
    eprintln!("{} cards", cards.len());
}
