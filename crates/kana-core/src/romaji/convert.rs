use serde::Serialize;
use tracing::{debug, debug_span};

use super::table::{INPUT_BUFFER_SIZE, MAX_ROMAJI_LENGTH};
use super::trie::{RomajiTable, TrieLookupResult};

/// Capacity ceilings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of characters held in the pending buffer.
    pub pending: usize,
    /// Maximum size in bytes of the converted output, pending tail included.
    pub output_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            pending: MAX_ROMAJI_LENGTH - 1,
            output_bytes: INPUT_BUFFER_SIZE - 1,
        }
    }
}

/// Result of converting a full romaji string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RomajiConvertResult {
    /// Resolved output: kana plus any characters passed through verbatim.
    pub composed_kana: String,
    /// Trailing romaji that could still grow into a rule.
    pub pending_romaji: String,
    /// Characters force-emitted because the pending buffer was full.
    pub forced: usize,
    /// Input characters left out of the output because it hit its ceiling.
    pub dropped: usize,
    pub truncated: bool,
}

impl RomajiConvertResult {
    /// Text to show the player: resolved kana followed by the raw pending tail.
    pub fn display(&self) -> String {
        format!("{}{}", self.composed_kana, self.pending_romaji)
    }

    pub fn is_resolved(&self) -> bool {
        self.pending_romaji.is_empty()
    }
}

/// Convert romaji to hiragana for display, using the global table.
///
/// Unresolved trailing romaji is kept verbatim, so `"kyot"` gives `"きょt"`.
pub fn transliterate(romaji: &str) -> String {
    convert_romaji(romaji).display()
}

/// Convert romaji with the global table and default limits.
pub fn convert_romaji(romaji: &str) -> RomajiConvertResult {
    convert_with(RomajiTable::global(), romaji, Limits::default())
}

/// Convert the whole of `romaji` in one left-to-right pass.
///
/// Each character is appended to a pending window and looked up:
/// - an exact key emits its kana (exact wins over waiting, so `n` is ん at once);
/// - a proper prefix of some key keeps waiting for more input;
/// - a dead end backs off to the longest exact prefix of the window, or emits
///   the window's first character verbatim, then re-reads the rest.
///
/// Input left pending at the end is reported in `pending_romaji`.
pub fn convert_with(table: &RomajiTable, romaji: &str, limits: Limits) -> RomajiConvertResult {
    let _span = debug_span!("convert_romaji", len = romaji.len()).entered();

    let input: Vec<char> = romaji.chars().collect();
    let capacity = limits.pending.max(1);
    let mut out = BoundedOutput::new(limits.output_bytes);
    let mut forced = 0;

    // input[start..pos] is the pending window.
    let mut start = 0;
    let mut pos = 0;
    let mut key = String::new();

    while pos < input.len() {
        if pos - start >= capacity {
            if !out.emit_char(input[start]) {
                break;
            }
            debug!(ch = %input[start], "pending buffer full, emitting verbatim");
            start += 1;
            forced += 1;
            continue;
        }

        pos += 1;
        key.clear();
        key.extend(&input[start..pos]);

        match table.lookup(&key) {
            TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) => {
                if !out.emit(kana, pos - start) {
                    break;
                }
                start = pos;
            }
            TrieLookupResult::Prefix => {}
            TrieLookupResult::None => {
                let window = &input[start..pos - 1];
                match longest_exact_prefix(table, window) {
                    Some((len, kana)) => {
                        if !out.emit(kana, len) {
                            break;
                        }
                        start += len;
                    }
                    None => {
                        if !out.emit_char(input[start]) {
                            break;
                        }
                        start += 1;
                    }
                }
                // Re-read everything after what was just emitted.
                pos = start;
            }
        }
    }

    let pending_romaji = if out.truncated {
        String::new()
    } else {
        let tail: String = input[start..].iter().collect();
        out.take_tail(tail)
    };

    let dropped = input.len() - out.represented;
    if out.truncated {
        debug!(dropped, "output ceiling reached");
    }

    RomajiConvertResult {
        composed_kana: out.text,
        pending_romaji,
        forced,
        dropped,
        truncated: out.truncated,
    }
}

/// Longest prefix of `window` that is itself a rule, with its kana.
fn longest_exact_prefix<'t>(table: &'t RomajiTable, window: &[char]) -> Option<(usize, &'t str)> {
    (1..=window.len()).rev().find_map(|len| {
        let sub: String = window[..len].iter().collect();
        match table.lookup(&sub) {
            TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) => {
                Some((len, kana))
            }
            _ => None,
        }
    })
}

/// Output accumulator with a byte ceiling. A unit that does not fit is
/// dropped whole and nothing more is written.
struct BoundedOutput {
    text: String,
    ceiling: usize,
    /// Input characters fully accounted for in `text`.
    represented: usize,
    truncated: bool,
}

impl BoundedOutput {
    fn new(ceiling: usize) -> Self {
        Self {
            text: String::new(),
            ceiling,
            represented: 0,
            truncated: false,
        }
    }

    fn room(&self) -> usize {
        self.ceiling.saturating_sub(self.text.len())
    }

    /// Append `s`, which stands for `consumed` input characters.
    fn emit(&mut self, s: &str, consumed: usize) -> bool {
        if self.truncated {
            return false;
        }
        if s.len() > self.room() {
            self.truncated = true;
            return false;
        }
        self.text.push_str(s);
        self.represented += consumed;
        true
    }

    fn emit_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.emit(c.encode_utf8(&mut buf), 1)
    }

    /// Fit the pending tail into the remaining room.
    fn take_tail(&mut self, tail: String) -> String {
        let cut = floor_char_boundary(&tail, self.room());
        if cut < tail.len() {
            self.truncated = true;
        }
        let kept = &tail[..cut];
        self.represented += kept.chars().count();
        kept.to_string()
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut i = max.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
