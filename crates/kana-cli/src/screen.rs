//! Terminal rendering of a `GameSession`.
//!
//! The session works in field units (800×600 by default); everything is
//! scaled onto the terminal grid at draw time.

use std::io::{self, Write};

use crossterm::event::KeyCode;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use unicode_width::UnicodeWidthStr;

use kana_session::{EnemyState, GameSession, KeyEvent};

/// Translate a terminal key into a session key event.
///
/// Letters are folded to lowercase, so Shift does not block typing.
pub fn key_event(code: KeyCode) -> Option<KeyEvent> {
    match code {
        KeyCode::Char(c) => Some(KeyEvent::Char(c.to_ascii_lowercase())),
        KeyCode::Backspace => Some(KeyEvent::Backspace),
        KeyCode::Enter => Some(KeyEvent::Enter),
        KeyCode::Esc => Some(KeyEvent::Escape),
        _ => None,
    }
}

/// Map a field position to a terminal cell, or `None` if it is above the
/// top edge. Positions past the other edges are clamped.
pub fn to_cell(x: f32, y: f32, field: (u32, u32), size: (u16, u16)) -> Option<(u16, u16)> {
    let (cols, rows) = size;
    if y < 0.0 || cols == 0 || rows == 0 {
        return None;
    }
    let col = (x.max(0.0) / field.0 as f32 * cols as f32) as u16;
    let row = (y / field.1 as f32 * rows as f32) as u16;
    Some((col.min(cols - 1), row.min(rows - 1)))
}

/// Start column for `text` centered on `center`, kept on screen when it fits.
pub fn centered_start(center: u16, text: &str, cols: u16) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let start = center.saturating_sub(width / 2);
    start.min(cols.saturating_sub(width))
}

fn print_centered(
    out: &mut impl Write,
    text: &str,
    at: (u16, u16),
    cols: u16,
    color: Color,
) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    queue!(
        out,
        cursor::MoveTo(centered_start(at.0, text, cols), at.1),
        SetForegroundColor(color),
        Print(text),
    )
}

/// Draw one frame.
pub fn draw(out: &mut impl Write, session: &GameSession, size: (u16, u16)) -> io::Result<()> {
    let field = session.field_size();
    let (fw, fh) = (field.0 as f32, field.1 as f32);
    let cell = |x: f32, y: f32| to_cell(x, y, field, size);

    queue!(out, Clear(ClearType::All))?;

    for (_, enemy) in session.enemies() {
        let Some(card) = session.card(enemy.card) else {
            continue;
        };
        let Some(at) = cell(enemy.x, enemy.y) else {
            continue;
        };
        match enemy.state {
            EnemyState::Falling => print_centered(out, &card.word, at, size.0, Color::White)?,
            EnemyState::ShowingMeaning { .. } => {
                print_centered(out, &card.meaning, at, size.0, Color::Green)?
            }
        }
    }

    if let Some(at) = cell(fw / 2.0, fh - 120.0) {
        print_centered(out, &session.input().display(), at, size.0, Color::Yellow)?;
    }
    if let Some(at) = cell(fw / 2.0, fh - 80.0) {
        print_centered(out, session.input().romaji(), at, size.0, Color::Cyan)?;
    }
    if let Some(at) = cell(100.0, 30.0) {
        let score = format!("Score: {}", session.score());
        print_centered(out, &score, at, size.0, Color::White)?;
    }

    if session.is_game_over() {
        if let Some((col, row)) = cell(fw / 2.0, fh / 2.0) {
            print_centered(out, "GAME OVER", (col, row), size.0, Color::Red)?;
            let hint = "Esc to quit";
            print_centered(out, hint, (col, row.saturating_add(1)), size.0, Color::DarkGrey)?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}
