//! Soft-drop hold tracking for terminal environments.
//!
//! Terminals that do not emit key release events would otherwise leave a
//! board soft-dropping forever after a single tap. The tracker turns
//! presses into a held state and synthesizes the matching `SoftDropEnd`
//! after a timeout without repeats.

use arrayvec::ArrayVec;

use crate::types::{InputEvent, PlayerAction, PlayerId};

// Auto-release window: terminal auto-repeat arrives well inside this, so a
// held key keeps the state alive while a single tap expires quickly.
const DEFAULT_HOLD_TIMEOUT_MS: u32 = 150;

/// Per-player soft-drop hold state.
#[derive(Debug, Clone)]
pub struct SoftDropTracker {
    /// Remaining ms until the hold expires, per player; None = not held
    remaining: [Option<u32>; 2],
    timeout_ms: u32,
}

impl SoftDropTracker {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_HOLD_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            remaining: [None, None],
            timeout_ms,
        }
    }

    pub fn is_held(&self, player: PlayerId) -> bool {
        self.remaining[player.index()].is_some()
    }

    /// Register a press (or terminal auto-repeat) of the soft-drop key.
    ///
    /// Returns the `SoftDropStart` event on the initial press; repeats only
    /// refresh the hold window.
    pub fn press(&mut self, player: PlayerId) -> Option<InputEvent> {
        let slot = &mut self.remaining[player.index()];
        let started = slot.is_none();
        *slot = Some(self.timeout_ms);
        started.then(|| InputEvent::new(player, PlayerAction::SoftDropStart))
    }

    /// Register an explicit key release (terminals that report them).
    pub fn release(&mut self, player: PlayerId) -> Option<InputEvent> {
        let slot = &mut self.remaining[player.index()];
        let was_held = slot.take().is_some();
        was_held.then(|| InputEvent::new(player, PlayerAction::SoftDropEnd))
    }

    /// Age the holds by one frame; expired holds emit `SoftDropEnd`.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputEvent, 2> {
        let mut events = ArrayVec::new();
        for player in [PlayerId::One, PlayerId::Two] {
            let slot = &mut self.remaining[player.index()];
            if let Some(remaining) = slot {
                if *remaining <= elapsed_ms {
                    *slot = None;
                    events.push(InputEvent::new(player, PlayerAction::SoftDropEnd));
                } else {
                    *remaining -= elapsed_ms;
                }
            }
        }
        events
    }

    pub fn reset(&mut self) {
        self.remaining = [None, None];
    }
}

impl Default for SoftDropTracker {
    fn default() -> Self {
        Self::new()
    }
}
