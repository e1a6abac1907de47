//! Duel module - the two-board orchestrator
//!
//! Owns both player boards, routes input events to the addressed side,
//! ticks the boards in a fixed order, and decides the terminal state.
//! Rendering never happens here; observers get read-only snapshots.

use anyhow::Result;

use crate::config::DuelConfig;
use crate::core::snapshot::DuelSnapshot;
use crate::core::PlayerBoard;
use crate::types::{Direction, DuelOutcome, InputEvent, PlayerAction, PlayerId};

/// A running two-player match.
#[derive(Debug, Clone)]
pub struct Duel {
    config: DuelConfig,
    boards: [PlayerBoard; 2],
    outcome: Option<DuelOutcome>,
}

impl Duel {
    /// Build both boards from one config; fails fast on bad configuration.
    pub fn new(config: DuelConfig) -> Result<Self> {
        config.validate()?;
        let boards = Self::build_boards(&config);
        Ok(Self {
            config,
            boards,
            outcome: None,
        })
    }

    fn build_boards(config: &DuelConfig) -> [PlayerBoard; 2] {
        [
            PlayerBoard::from_validated(config.board.clone(), config.seeds[0]),
            PlayerBoard::from_validated(config.board.clone(), config.seeds[1]),
        ]
    }

    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.boards[player.index()]
    }

    #[cfg(test)]
    pub fn board_mut(&mut self, player: PlayerId) -> &mut PlayerBoard {
        &mut self.boards[player.index()]
    }

    pub fn outcome(&self) -> Option<DuelOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Route one input event to the addressed board.
    ///
    /// Events are applied one at a time, never merged. `Restart` is the
    /// only match-level action: it rebuilds both boards. All other actions
    /// are ignored once the match has ended.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if event.action == PlayerAction::Restart {
            self.restart();
            return true;
        }
        if self.is_finished() {
            return false;
        }

        let board = &mut self.boards[event.player.index()];
        let changed = match event.action {
            PlayerAction::MoveLeft => board.try_move(Direction::Left),
            PlayerAction::MoveRight => board.try_move(Direction::Right),
            PlayerAction::Rotate => board.try_rotate(),
            PlayerAction::SoftDropStart => {
                board.soft_drop_start();
                true
            }
            PlayerAction::SoftDropEnd => {
                board.soft_drop_end();
                true
            }
            PlayerAction::HardDrop => board.hard_drop(),
            PlayerAction::Restart => unreachable!("handled above"),
        };

        self.refresh_outcome();
        changed
    }

    /// Advance both boards by one frame.
    ///
    /// Board One always ticks before board Two so replays of the same
    /// (elapsed, events) sequence are deterministic.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_finished() {
            return false;
        }

        let mut changed = false;
        for board in &mut self.boards {
            changed |= board.tick(elapsed_ms);
        }

        self.refresh_outcome();
        changed
    }

    /// Rebuild both boards from the original configuration.
    ///
    /// The config was validated at construction, so rebuilding cannot fail.
    pub fn restart(&mut self) {
        self.boards = Self::build_boards(&self.config);
        self.outcome = None;
    }

    /// Derive the terminal state from the boards.
    ///
    /// One board over means the other side wins; both over in the same
    /// frame is a draw. Once set, the outcome never changes until restart.
    fn refresh_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let over_one = self.boards[0].is_game_over();
        let over_two = self.boards[1].is_game_over();
        self.outcome = match (over_one, over_two) {
            (true, true) => Some(DuelOutcome::Draw),
            (true, false) => Some(DuelOutcome::Winner(PlayerId::Two)),
            (false, true) => Some(DuelOutcome::Winner(PlayerId::One)),
            (false, false) => None,
        };
    }

    /// Fill a reusable snapshot with both boards and the outcome.
    pub fn snapshot_into(&self, out: &mut DuelSnapshot) {
        self.boards[0].snapshot_into(&mut out.boards[0]);
        self.boards[1].snapshot_into(&mut out.boards[1]);
        out.outcome = self.outcome.map(Into::into);
    }

    pub fn snapshot(&self) -> DuelSnapshot {
        let mut s = DuelSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
