//! Read-only snapshots handed to the renderer (or any other observer).
//!
//! Snapshots are plain data: cell codes instead of enums, no references
//! into live state. They derive serde so an external observer can consume
//! them as JSON; the field names are pinned by a schema gate test.

use serde::{Deserialize, Serialize};

use crate::types::DuelOutcome;

/// One falling-piece cell in absolute grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallingCell {
    pub row: i32,
    pub col: i32,
    /// Material code (see `Material::code`)
    pub material: u8,
}

/// Snapshot of one board: landed cells, falling cells, terminal flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: u32,
    pub cols: u32,
    /// Row-major cell codes, 0 = empty
    pub cells: Vec<u8>,
    /// Empty while the board is between lock and spawn, or after game over
    pub falling: Vec<FallingCell>,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// Cell code at (row, col); 0 when out of range
    pub fn cell(&self, row: u32, col: u32) -> u8 {
        if row >= self.rows || col >= self.cols {
            return 0;
        }
        self.cells[(row * self.cols + col) as usize]
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.falling.clear();
        self.game_over = false;
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            falling: Vec::new(),
            game_over: false,
        }
    }
}

/// Match outcome in snapshot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeSnapshot {
    WinnerOne,
    WinnerTwo,
    Draw,
}

impl From<DuelOutcome> for OutcomeSnapshot {
    fn from(value: DuelOutcome) -> Self {
        use crate::types::PlayerId;
        match value {
            DuelOutcome::Winner(PlayerId::One) => OutcomeSnapshot::WinnerOne,
            DuelOutcome::Winner(PlayerId::Two) => OutcomeSnapshot::WinnerTwo,
            DuelOutcome::Draw => OutcomeSnapshot::Draw,
        }
    }
}

/// Snapshot of the whole duel, one entry per player.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DuelSnapshot {
    pub boards: [BoardSnapshot; 2],
    pub outcome: Option<OutcomeSnapshot>,
}

impl DuelSnapshot {
    pub fn clear(&mut self) {
        for board in &mut self.boards {
            board.clear();
        }
        self.outcome = None;
    }

    pub fn finished(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerId;

    #[test]
    fn test_cell_lookup() {
        let snapshot = BoardSnapshot {
            rows: 2,
            cols: 3,
            cells: vec![0, 1, 0, 0, 0, 5],
            falling: Vec::new(),
            game_over: false,
        };
        assert_eq!(snapshot.cell(0, 1), 1);
        assert_eq!(snapshot.cell(1, 2), 5);
        assert_eq!(snapshot.cell(0, 0), 0);
        // Out of range reads as empty.
        assert_eq!(snapshot.cell(2, 0), 0);
        assert_eq!(snapshot.cell(0, 3), 0);
    }

    #[test]
    fn test_outcome_conversion() {
        assert_eq!(
            OutcomeSnapshot::from(DuelOutcome::Winner(PlayerId::One)),
            OutcomeSnapshot::WinnerOne
        );
        assert_eq!(
            OutcomeSnapshot::from(DuelOutcome::Winner(PlayerId::Two)),
            OutcomeSnapshot::WinnerTwo
        );
        assert_eq!(OutcomeSnapshot::from(DuelOutcome::Draw), OutcomeSnapshot::Draw);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut snapshot = DuelSnapshot::default();
        snapshot.boards[0].rows = 12;
        snapshot.boards[0].cells = vec![1, 2, 3];
        snapshot.outcome = Some(OutcomeSnapshot::Draw);

        snapshot.clear();
        assert_eq!(snapshot, DuelSnapshot::default());
        assert!(!snapshot.finished());
    }
}
