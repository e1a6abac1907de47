//! Key mapping from terminal events to per-player duel events.
//!
//! Two keyboard clusters share one keyboard: player One on the arrow keys,
//! player Two on the letter cluster around WASD.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{InputEvent, PlayerAction, PlayerId};

/// Map a key press to a duel event.
pub fn handle_key_press(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        // Player One: arrows, space to rotate, enter to drop
        KeyCode::Left => Some(InputEvent::new(PlayerId::One, PlayerAction::MoveLeft)),
        KeyCode::Right => Some(InputEvent::new(PlayerId::One, PlayerAction::MoveRight)),
        KeyCode::Up | KeyCode::Char(' ') => {
            Some(InputEvent::new(PlayerId::One, PlayerAction::Rotate))
        }
        KeyCode::Down => Some(InputEvent::new(PlayerId::One, PlayerAction::SoftDropStart)),
        KeyCode::Enter => Some(InputEvent::new(PlayerId::One, PlayerAction::HardDrop)),

        // Player Two: a/d to move, q or w to rotate, s to soft drop, e to drop
        KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::MoveLeft))
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::MoveRight))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::Rotate))
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::SoftDropStart))
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::HardDrop))
        }

        // Match-level restart; the routing player is irrelevant.
        KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(InputEvent::new(PlayerId::One, PlayerAction::Restart))
        }

        _ => None,
    }
}

/// Map a key release to a duel event (soft-drop end only).
///
/// Terminals that never emit release events are covered by the
/// `SoftDropTracker` timeout instead.
pub fn handle_key_release(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Down => Some(InputEvent::new(PlayerId::One, PlayerAction::SoftDropEnd)),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::new(PlayerId::Two, PlayerAction::SoftDropEnd))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
