use std::time::Duration;

/// Key event passed from the frontend to `GameSession::handle_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    Enter,
    Escape,
}

/// An enemy that was shot down by a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defeated {
    pub slot: usize,
    pub word: String,
    pub meaning: String,
}

/// Response from handle_key, returned to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    /// Updated input line (kana plus any pending romaji), set whenever the
    /// input buffer changed.
    pub display: Option<String>,
    pub defeated: Option<Defeated>,
    pub quit: bool,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            display: None,
            defeated: None,
            quit: false,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn with_display(display: String) -> Self {
        Self {
            display: Some(display),
            ..Self::consumed()
        }
    }
}

/// Something that happened during a `GameSession::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { slot: usize, card: usize },
    /// A defeated enemy finished showing its meaning and freed its slot.
    Expired { slot: usize },
    /// The enemy in `slot` reached the bottom of the field.
    GameOver { slot: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyState {
    Falling,
    ShowingMeaning { since: Duration },
}

/// A falling word. `card` indexes into the session's card list.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub card: usize,
    pub state: EnemyState,
}

impl Enemy {
    pub fn is_falling(&self) -> bool {
        self.state == EnemyState::Falling
    }
}
