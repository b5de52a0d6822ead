//! Character-level Unicode classification for card readings.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in card readings, so
/// the simpler block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check if a string is a non-empty, all-hiragana reading.
///
/// Only such readings can be matched by converted romaji; the prolonged sound
/// mark ー has no romaji rule, so it is rejected here.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana)
}
