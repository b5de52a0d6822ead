use kana_core::romaji::{convert_with, Limits, RomajiConvertResult, RomajiTable};

/// The player's typed romaji and its live hiragana rendering.
///
/// The whole buffer is reconverted on every change, so backspace is just
/// popping the last letter.
#[derive(Debug, Clone)]
pub struct RomajiInput {
    romaji: String,
    max_len: usize,
    limits: Limits,
    conversion: RomajiConvertResult,
}

impl RomajiInput {
    pub fn new(max_len: usize, limits: Limits) -> Self {
        Self {
            romaji: String::new(),
            max_len,
            limits,
            conversion: RomajiConvertResult::default(),
        }
    }

    /// Append a lowercase ASCII letter. Returns false if `c` is not one or
    /// the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_lowercase() || self.romaji.len() >= self.max_len {
            return false;
        }
        self.romaji.push(c);
        self.reconvert();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.romaji.pop().is_none() {
            return false;
        }
        self.reconvert();
        true
    }

    pub fn clear(&mut self) {
        self.romaji.clear();
        self.conversion = RomajiConvertResult::default();
    }

    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    pub fn conversion(&self) -> &RomajiConvertResult {
        &self.conversion
    }

    pub fn display(&self) -> String {
        self.conversion.display()
    }

    pub fn is_empty(&self) -> bool {
        self.romaji.is_empty()
    }

    fn reconvert(&mut self) {
        self.conversion = convert_with(RomajiTable::global(), &self.romaji, self.limits);
    }
}
