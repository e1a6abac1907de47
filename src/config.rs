//! Board and duel configuration.
//!
//! Everything the simulation used to get from ad hoc globals (grid size,
//! fall speed, piece shape, material palette) is passed in here explicitly
//! and validated before the tick loop ever runs.

use anyhow::{bail, Result};
use arrayvec::ArrayVec;

use crate::types::{
    Material, DEFAULT_COLS, DEFAULT_FALL_INTERVAL_MS, DEFAULT_ROWS, DEFAULT_SOFT_DROP_MULTIPLIER,
    MAX_PIECE_CELLS,
};

/// (row delta, column delta) of one piece cell relative to the anchor
pub type CellOffset = (i32, i32);

/// Shape of a falling piece: cell offsets plus the pivot used for rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSpec {
    pub offsets: ArrayVec<CellOffset, MAX_PIECE_CELLS>,
    pub pivot: CellOffset,
}

impl ShapeSpec {
    /// The stock trio: two cells in the top row adjacent to center, one cell
    /// directly below the center cell. Pivot is the center cell.
    pub fn trio() -> Self {
        let mut offsets = ArrayVec::new();
        offsets.push((0, -1));
        offsets.push((0, 0));
        offsets.push((1, 0));
        Self {
            offsets,
            pivot: (0, 0),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self::trio()
    }
}

/// Per-board configuration, supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: u32,
    pub cols: u32,
    pub fall_interval_ms: u32,
    pub soft_drop_multiplier: u32,
    pub shape: ShapeSpec,
    pub palette: Vec<Material>,
}

impl BoardConfig {
    /// Anchor position (row, col) where a fresh piece spawns
    pub fn spawn_anchor(&self) -> (i32, i32) {
        (0, (self.cols / 2) as i32)
    }

    /// Reject malformed configuration before it can reach the tick loop.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            bail!("grid dimensions must be positive ({}x{})", self.rows, self.cols);
        }
        if self.fall_interval_ms == 0 {
            bail!("fall interval must be positive");
        }
        if self.soft_drop_multiplier == 0 {
            bail!("soft drop multiplier must be positive");
        }
        if self.shape.is_empty() {
            bail!("piece shape must have at least one cell");
        }
        if self.palette.is_empty() {
            bail!("material palette must not be empty");
        }

        // Every cell of a fresh piece must land inside the grid.
        let (anchor_row, anchor_col) = self.spawn_anchor();
        for &(dr, dc) in &self.shape.offsets {
            let row = anchor_row + dr;
            let col = anchor_col + dc;
            if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
                bail!(
                    "shape cell ({}, {}) spawns outside the {}x{} grid",
                    dr,
                    dc,
                    self.rows,
                    self.cols
                );
            }
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            soft_drop_multiplier: DEFAULT_SOFT_DROP_MULTIPLIER,
            shape: ShapeSpec::trio(),
            palette: Material::ALL.to_vec(),
        }
    }
}

/// Configuration for a two-board duel.
///
/// Boards are isomorphic: one `BoardConfig`, two RNG seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelConfig {
    pub board: BoardConfig,
    pub seeds: [u32; 2],
}

impl DuelConfig {
    pub fn validate(&self) -> Result<()> {
        self.board.validate()
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seeds: [1, 2],
        }
    }
}
