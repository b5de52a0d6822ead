//! Property tests for the romaji converter.

use proptest::prelude::*;

use super::{convert_romaji, transliterate, RomajiRule, RomajiTable, TrieLookupResult};

/// Rules whose key has no shorter exact key in front of it. Typing such a key
/// alone always yields its own kana (the n-row is the exception: ん wins first).
fn reachable_rules() -> Vec<RomajiRule> {
    let table = RomajiTable::global();
    table
        .rules()
        .iter()
        .filter(|rule| {
            (1..rule.romaji.len()).all(|len| {
                !matches!(
                    table.lookup(&rule.romaji[..len]),
                    TrieLookupResult::Exact(_) | TrieLookupResult::ExactAndPrefix(_)
                )
            })
        })
        .cloned()
        .collect()
}

#[test]
fn every_reachable_rule_converts_to_its_kana() {
    let rules = reachable_rules();
    assert!(rules.len() > 100);
    for rule in &rules {
        assert_eq!(transliterate(&rule.romaji), rule.kana, "romaji={}", rule.romaji);
    }
}

#[test]
fn only_the_n_row_is_shadowed() {
    let reachable = reachable_rules();
    let shadowed: Vec<&str> = RomajiTable::global()
        .rules()
        .iter()
        .filter(|r| !reachable.contains(r))
        .map(|r| r.romaji.as_str())
        .collect();
    assert_eq!(
        shadowed,
        vec!["nya", "nyu", "nyo", "na", "ni", "nu", "ne", "no"]
    );
}

fn arb_rule() -> impl Strategy<Value = RomajiRule> {
    prop::sample::select(reachable_rules())
}

/// Characters no rule starts with.
fn arb_foreign_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'q', 'x', 'l', 'v', 'Q', 'K', 'A', '0', '7', '-', '.', '!', ' ', 'ア', '漢',
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn concatenated_mora_convert_independently(rules in prop::collection::vec(arb_rule(), 0..20)) {
        let romaji: String = rules.iter().map(|r| r.romaji.as_str()).collect();
        let kana: String = rules.iter().map(|r| r.kana.as_str()).collect();
        prop_assert_eq!(transliterate(&romaji), kana);
    }

    #[test]
    fn foreign_chars_pass_through(chars in prop::collection::vec(arb_foreign_char(), 0..30)) {
        let input: String = chars.into_iter().collect();
        prop_assert_eq!(transliterate(&input), input);
    }

    #[test]
    fn output_never_outgrows_input(input in "[a-z]{0,80}") {
        let r = convert_romaji(&input);
        prop_assert!(r.display().chars().count() <= input.chars().count());
        prop_assert_eq!(r.display(), transliterate(&input));
        prop_assert!(!r.truncated);
        prop_assert_eq!(r.dropped, 0);
    }

    #[test]
    fn any_input_terminates_within_ceiling(input in "\\PC{0,300}") {
        let r = convert_romaji(&input);
        prop_assert!(r.display().len() <= 255);
        prop_assert!(r.display().chars().count() <= input.chars().count());
        prop_assert!(r.dropped <= input.chars().count());
    }

    #[test]
    fn pending_tail_is_always_a_live_prefix(input in "[a-z]{1,40}") {
        let r = convert_romaji(&input);
        if !r.pending_romaji.is_empty() {
            prop_assert_eq!(
                RomajiTable::global().lookup(&r.pending_romaji),
                TrieLookupResult::Prefix
            );
            prop_assert!(input.ends_with(&r.pending_romaji));
        }
    }
}
