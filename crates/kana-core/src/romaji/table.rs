/// Built-in rule table, in priority order.
pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded default rule table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// The pending buffer holds at most `MAX_ROMAJI_LENGTH - 1` characters.
pub const MAX_ROMAJI_LENGTH: usize = 10;

/// Romaji input and kana output are each capped at `INPUT_BUFFER_SIZE - 1` bytes.
pub const INPUT_BUFFER_SIZE: usize = 256;
