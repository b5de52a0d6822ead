use super::Card;

/// Anki stores a note's fields in one column, separated by U+001F.
pub const FIELD_SEPARATOR: char = '\x1f';

const GLOSSARY_MARKER: &str = "yomitan-glossary";
const DIV_OPEN: &str = "<div>";
const DIV_CLOSE: &str = "</div>";

/// Build a card from a note's raw field string.
///
/// Fields are word, reading, meaning, in that order; anything after the third
/// is ignored. Returns `None` if any of the three is missing or blank.
pub fn parse_note_fields(fields: &str) -> Option<Card> {
    let mut parts = fields.split(FIELD_SEPARATOR).map(str::trim);

    let word = parts.next().filter(|s| !s.is_empty())?;
    let reading = parts.next().filter(|s| !s.is_empty())?;
    let meaning = parts
        .next()
        .and_then(extract_first_meaning)
        .filter(|s| !s.is_empty())?;

    Some(Card {
        word: word.to_string(),
        reading: reading.to_string(),
        meaning,
    })
}

/// Pull the first gloss out of a Yomitan-generated meaning field.
///
/// Plain text without the glossary marker is returned unchanged. With the
/// marker, the content of the first `<div>` after it is returned, or `None`
/// if that div is not closed.
pub fn extract_first_meaning(html: &str) -> Option<String> {
    let Some(at) = html.find(GLOSSARY_MARKER) else {
        return Some(html.to_string());
    };
    let rest = &html[at..];
    let body = &rest[rest.find(DIV_OPEN)? + DIV_OPEN.len()..];
    let end = body.find(DIV_CLOSE)?;
    Some(body[..end].trim().to_string())
}
