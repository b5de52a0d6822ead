mod enemies;

use std::time::Duration;

use kana_core::deck::Card;
use kana_core::settings::{settings, Settings};

use super::types::{Enemy, EnemyState, KeyEvent};
use super::GameSession;
use super::KeyResponse;

/// Cards whose readings avoid the な row and っ, so each is reachable by
/// typing its romaji.
pub(super) fn test_cards() -> Vec<Card> {
    vec![
        Card::new("京都", "きょうと", "Kyoto"),
        Card::new("空", "そら", "sky"),
        Card::new("寿司", "すし", "sushi"),
        Card::new("茶", "ちゃ", "tea"),
    ]
}

/// Romaji that converts to the reading of `test_cards()[i]`.
pub(super) const TEST_ANSWERS: [&str; 4] = ["kyouto", "sora", "sushi", "cha"];

pub(super) fn test_settings() -> Settings {
    settings().clone()
}

pub(super) fn make_session() -> GameSession {
    GameSession::with_seed(test_cards(), &test_settings(), 7)
}

pub(super) fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Put a falling enemy for `card` directly into `slot`.
pub(super) fn place_enemy(session: &mut GameSession, slot: usize, card: usize, y: f32) {
    session.slots[slot] = Some(Enemy {
        x: 400.0,
        y,
        card,
        state: EnemyState::Falling,
    });
}

pub(super) fn type_string(session: &mut GameSession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|c| session.handle_key(KeyEvent::Char(c)))
        .collect()
}
