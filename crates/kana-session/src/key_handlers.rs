use tracing::{debug, debug_span, info};

use super::types::{Defeated, EnemyState, KeyEvent, KeyResponse};
use super::GameSession;

impl GameSession {
    /// Process a key event. Returns a KeyResponse describing what the frontend should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        // Only quitting works after the game ends.
        if self.game_over && event != KeyEvent::Escape {
            return KeyResponse::not_consumed();
        }

        match event {
            KeyEvent::Char(c) => {
                if self.input.push(c) {
                    KeyResponse::with_display(self.input.display())
                } else {
                    KeyResponse::not_consumed()
                }
            }
            KeyEvent::Backspace => {
                if self.input.backspace() {
                    KeyResponse::with_display(self.input.display())
                } else {
                    KeyResponse::consumed()
                }
            }
            KeyEvent::Enter => self.submit(),
            KeyEvent::Escape => KeyResponse {
                quit: true,
                ..KeyResponse::consumed()
            },
        }
    }

    /// Fire the current input at the first falling enemy whose reading matches.
    fn submit(&mut self) -> KeyResponse {
        let answer = self.input.display();
        if answer.is_empty() {
            return KeyResponse::consumed();
        }

        let hit = self.slots.iter().position(|slot| {
            slot.as_ref().is_some_and(|e| {
                e.is_falling() && self.cards[e.card].reading == answer
            })
        });
        let Some((slot, Some(enemy))) = hit.map(|i| (i, self.slots[i].as_mut())) else {
            debug!(%answer, "no enemy matches");
            return KeyResponse::consumed();
        };

        enemy.state = EnemyState::ShowingMeaning { since: self.now };
        let card = &self.cards[enemy.card];
        self.score += self.config.points_per_kill;
        info!(slot, word = %card.word, score = self.score, "enemy defeated");

        let defeated = Defeated {
            slot,
            word: card.word.clone(),
            meaning: card.meaning.clone(),
        };
        self.input.clear();
        KeyResponse {
            defeated: Some(defeated),
            ..KeyResponse::with_display(String::new())
        }
    }
}
