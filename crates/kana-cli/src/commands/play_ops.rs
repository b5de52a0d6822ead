use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use tracing::{debug, info};

use kana_core::deck::load_playable;
use kana_core::settings::settings;
use kana_core::unicode::is_hiragana_reading;
use kana_session::GameSession;

use super::deck_ops::open_collection;
use crate::screen;

/// ~30 fps
const FRAME: Duration = Duration::from_millis(33);

pub fn play_cmd(collection: &str, deck: &str) {
    let col = open_collection(collection);
    let cards = die!(load_playable(&col, deck), "Error: {}");

    let untypable = cards
        .iter()
        .filter(|c| !is_hiragana_reading(&c.reading))
        .count();
    if untypable > 0 {
        eprintln!("warning: {untypable} cards have readings that are not plain hiragana");
    }
    info!(deck, cards = cards.len(), "starting game");

    let mut session = GameSession::new(cards, settings());
    let score = die!(run(&mut session), "Terminal error: {}");
    println!("Score: {score}");
}

/// Raw mode plus the alternate screen, undone on drop.
struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { out, raw: true };
        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Best effort.
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Run the game in the alternate screen. The terminal is restored however
/// the loop ends, panics included.
fn run(session: &mut GameSession) -> io::Result<u32> {
    let mut guard = TerminalGuard::enter(stdout())?;
    game_loop(&mut guard.out, session)
}

fn game_loop(out: &mut impl Write, session: &mut GameSession) -> io::Result<u32> {
    let start = Instant::now();
    let mut size = terminal::size()?;

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Raw mode swallows SIGINT.
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(session.score());
                    }
                    let Some(ev) = screen::key_event(key.code) else {
                        continue;
                    };
                    if session.handle_key(ev).quit {
                        return Ok(session.score());
                    }
                }
                Event::Resize(cols, rows) => size = (cols, rows),
                _ => {}
            }
        }

        // Update
        for ev in session.tick(start.elapsed()) {
            debug!(?ev, "game event");
        }

        // Render
        screen::draw(out, session, size)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}
