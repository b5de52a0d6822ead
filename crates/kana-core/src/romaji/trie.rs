use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, validate_rules, RomajiConfigError, RomajiRule};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

struct Node {
    children: HashMap<u8, Node>,
    rule: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rule: None,
        }
    }
}

/// Ordered rule list with a byte trie over the romaji keys.
///
/// Keys are unique, so the rule found by the trie for an exact key is the
/// same one a scan in table order would find first.
pub struct RomajiTable {
    rules: Vec<RomajiRule>,
    root: Node,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let rules = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            Self::build(rules)
        })
    }

    /// Build a standalone table from an ordered rule list.
    pub fn from_rules(rules: Vec<RomajiRule>) -> Result<Self, RomajiConfigError> {
        validate_rules(&rules)?;
        Ok(Self::build(rules))
    }

    fn build(rules: Vec<RomajiRule>) -> Self {
        let mut root = Node::new();
        for (idx, rule) in rules.iter().enumerate() {
            let mut node = &mut root;
            for &b in rule.romaji.as_bytes() {
                node = node.children.entry(b).or_insert_with(Node::new);
            }
            node.rule = Some(idx);
        }
        Self { rules, root }
    }

    pub fn rules(&self) -> &[RomajiRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Length in bytes of the longest romaji key.
    pub fn longest_key(&self) -> usize {
        self.rules.iter().map(|r| r.romaji.len()).max().unwrap_or(0)
    }

    pub fn lookup(&self, romaji: &str) -> TrieLookupResult<'_> {
        let mut node = &self.root;
        for &b in romaji.as_bytes() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match node.rule {
            Some(idx) => {
                let kana = self.rules[idx].kana.as_str();
                if has_children {
                    TrieLookupResult::ExactAndPrefix(kana)
                } else {
                    TrieLookupResult::Exact(kana)
                }
            }
            // The empty string sits at the root and is never a rule.
            None if has_children => TrieLookupResult::Prefix,
            None => TrieLookupResult::None,
        }
    }
}
