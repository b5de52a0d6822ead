//! Game session for the falling-words typing game.
//!
//! `GameSession` owns the deck, the enemy slots and the player's romaji input.
//! The frontend feeds it key events via `handle_key` and wall-clock time via
//! `tick`, and renders whatever state the accessors expose.

pub(crate) mod types;

mod enemies;
mod input;
mod key_handlers;

#[cfg(test)]
mod tests;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use kana_core::deck::Card;
use kana_core::settings::Settings;

pub use input::RomajiInput;
pub use types::{Defeated, Enemy, EnemyState, GameEvent, KeyEvent, KeyResponse};

/// Session parameters resolved from `Settings` once at construction.
#[derive(Debug, Clone)]
pub(crate) struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub speed: f32,
    pub spawn_delay: Duration,
    pub meaning_duration: Duration,
    pub points_per_kill: u32,
}

impl SessionConfig {
    fn from_settings(s: &Settings) -> Self {
        Self {
            width: s.field.width,
            height: s.field.height,
            speed: s.enemies.speed,
            spawn_delay: s.enemies.spawn_delay(),
            meaning_duration: s.enemies.meaning_duration(),
            points_per_kill: s.scoring.points_per_kill,
        }
    }
}

/// One round of the game, from the first spawn to game over.
pub struct GameSession {
    cards: Vec<Card>,
    config: SessionConfig,

    /// Fixed number of slots; `None` is free.
    slots: Vec<Option<Enemy>>,
    input: RomajiInput,
    score: u32,
    game_over: bool,

    /// Time of the latest tick, measured from session start.
    now: Duration,
    last_spawn: Duration,
    rng: StdRng,
}

impl GameSession {
    pub fn new(cards: Vec<Card>, settings: &Settings) -> Self {
        Self::with_rng(cards, settings, StdRng::from_entropy())
    }

    /// Deterministic session: the same seed spawns the same cards at the
    /// same positions.
    pub fn with_seed(cards: Vec<Card>, settings: &Settings, seed: u64) -> Self {
        Self::with_rng(cards, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cards: Vec<Card>, settings: &Settings, rng: StdRng) -> Self {
        Self {
            cards,
            config: SessionConfig::from_settings(settings),
            slots: vec![None; settings.enemies.max],
            input: RomajiInput::new(settings.input.max_romaji, settings.limits()),
            score: 0,
            game_over: false,
            now: Duration::ZERO,
            last_spawn: Duration::ZERO,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn input(&self) -> &RomajiInput {
        &self.input
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Field size in the same units as enemy coordinates.
    pub fn field_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Occupied slots in slot order.
    pub fn enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (i, e)))
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
