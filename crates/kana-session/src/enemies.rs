use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::types::{Enemy, EnemyState, GameEvent};
use super::GameSession;

/// Enemies spawn at least this far from either side of the field.
const SPAWN_MARGIN: u32 = 50;
const SPAWN_Y: f32 = -50.0;
/// An enemy whose y passes `height - BOTTOM_MARGIN` ends the game.
const BOTTOM_MARGIN: f32 = 50.0;

impl GameSession {
    /// Advance the game clock to `now` (time since session start).
    ///
    /// Moves falling enemies by the elapsed time, frees slots whose meaning
    /// display has run out, then spawns at most one enemy. A new enemy starts
    /// at the spawn line and only moves on later ticks. Does nothing once the
    /// game is over.
    pub fn tick(&mut self, now: Duration) -> Vec<GameEvent> {
        let dt = now.saturating_sub(self.now);
        self.now = self.now.max(now);

        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        self.update_enemies(dt, &mut events);
        if self.game_over {
            return events;
        }

        if self.now.saturating_sub(self.last_spawn) > self.config.spawn_delay {
            if let Some(ev) = self.spawn_enemy() {
                events.push(ev);
            }
            self.last_spawn = self.now;
        }
        events
    }

    fn spawn_enemy(&mut self) -> Option<GameEvent> {
        if self.cards.is_empty() {
            return None;
        }
        let slot = self.slots.iter().position(Option::is_none)?;

        let card = self.rng.gen_range(0..self.cards.len());
        let x = self
            .rng
            .gen_range(SPAWN_MARGIN..self.config.width - SPAWN_MARGIN) as f32;
        self.slots[slot] = Some(Enemy {
            x,
            y: SPAWN_Y,
            card,
            state: EnemyState::Falling,
        });
        debug!(slot, card, x, word = %self.cards[card].word, "spawned enemy");
        Some(GameEvent::Spawned { slot, card })
    }

    fn update_enemies(&mut self, dt: Duration, events: &mut Vec<GameEvent>) {
        let fall = self.config.speed * dt.as_secs_f32();
        let bottom = self.config.height as f32 - BOTTOM_MARGIN;

        for (slot, entry) in self.slots.iter_mut().enumerate() {
            let Some(enemy) = entry.as_mut() else {
                continue;
            };
            let state = enemy.state;
            match state {
                EnemyState::ShowingMeaning { since } => {
                    if self.now.saturating_sub(since) > self.config.meaning_duration {
                        *entry = None;
                        events.push(GameEvent::Expired { slot });
                    }
                }
                EnemyState::Falling => {
                    enemy.y += fall;
                    if enemy.y > bottom && !self.game_over {
                        self.game_over = true;
                        info!(slot, score = self.score, "enemy reached the bottom, game over");
                        events.push(GameEvent::GameOver { slot });
                    }
                }
            }
        }
    }
}
