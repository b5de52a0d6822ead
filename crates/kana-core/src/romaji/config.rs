use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One romaji → kana mapping. Tables are ordered; earlier rules take priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomajiRule {
    pub romaji: String,
    pub kana: String,
}

impl RomajiRule {
    pub fn new(romaji: &str, kana: &str) -> Self {
        Self {
            romaji: romaji.to_string(),
            kana: kana.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RomajiConfig {
    rules: Vec<RomajiRule>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[rules]] list is empty")]
    Empty,
    #[error("empty romaji key for kana {0:?}")]
    EmptyKey(String),
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into an ordered rule list.
pub fn parse_romaji_toml(toml_str: &str) -> Result<Vec<RomajiRule>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;
    validate_rules(&config.rules)?;
    Ok(config.rules)
}

pub(super) fn validate_rules(rules: &[RomajiRule]) -> Result<(), RomajiConfigError> {
    if rules.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut seen = HashSet::with_capacity(rules.len());
    for rule in rules {
        if rule.romaji.is_empty() {
            return Err(RomajiConfigError::EmptyKey(rule.kana.clone()));
        }
        if !rule.romaji.is_ascii() {
            return Err(RomajiConfigError::NonAsciiKey(rule.romaji.clone()));
        }
        if rule.kana.is_empty() {
            return Err(RomajiConfigError::EmptyValue(rule.romaji.clone()));
        }
        if !seen.insert(rule.romaji.as_str()) {
            return Err(RomajiConfigError::DuplicateKey(rule.romaji.clone()));
        }
    }

    Ok(())
}
