//! Piece module - the falling trio and its geometry
//!
//! All candidate positions are produced here as pure values (shifted or
//! rotated copies) and validated against the grid with one rule, so that
//! lateral movement, rotation, and gravity cannot diverge on what counts
//! as a collision.

use arrayvec::ArrayVec;

use crate::config::{CellOffset, ShapeSpec};
use crate::core::Grid;
use crate::types::{Material, MAX_PIECE_CELLS};

/// Rotate one offset 90 degrees about a pivot.
///
/// Pivot-relative (dr, dc) maps to (-dc, dr); applying it four times is the
/// identity.
#[inline]
pub fn rotate_offset(offset: CellOffset, pivot: CellOffset) -> CellOffset {
    let dr = offset.0 - pivot.0;
    let dc = offset.1 - pivot.1;
    (pivot.0 - dc, pivot.1 + dr)
}

/// An absolute cell of the falling piece: (row, col, material)
pub type AbsoluteCell = (i32, i32, Material);

/// The falling piece: an ordered set of material cells around an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trio {
    /// Offsets from the anchor, paired with each cell's material
    cells: ArrayVec<(CellOffset, Material), MAX_PIECE_CELLS>,
    /// Rotation pivot, in the same offset space
    pivot: CellOffset,
    /// Absolute anchor position (row, col) on the grid
    anchor: (i32, i32),
}

impl Trio {
    /// Build a piece from a shape, an anchor, and one material per cell.
    ///
    /// `materials` must be at least as long as the shape; extra entries are
    /// ignored.
    pub fn new(shape: &ShapeSpec, anchor: (i32, i32), materials: &[Material]) -> Self {
        debug_assert!(materials.len() >= shape.len());
        let cells = shape
            .offsets
            .iter()
            .zip(materials.iter())
            .map(|(&offset, &material)| (offset, material))
            .collect();
        Self {
            cells,
            pivot: shape.pivot,
            anchor,
        }
    }

    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    /// Offsets and materials in spawn order
    pub fn cells(&self) -> &[(CellOffset, Material)] {
        &self.cells
    }

    /// Absolute grid cells occupied by this piece
    pub fn absolute_cells(&self) -> ArrayVec<AbsoluteCell, MAX_PIECE_CELLS> {
        self.cells
            .iter()
            .map(|&((dr, dc), material)| (self.anchor.0 + dr, self.anchor.1 + dc, material))
            .collect()
    }

    /// True iff every cell lies in bounds on an empty grid cell
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&((dr, dc), _)| grid.is_free(self.anchor.0 + dr, self.anchor.1 + dc))
    }

    /// Candidate piece with the anchor shifted by (dr, dc)
    pub fn shifted(&self, dr: i32, dc: i32) -> Self {
        Self {
            anchor: (self.anchor.0 + dr, self.anchor.1 + dc),
            ..self.clone()
        }
    }

    /// Candidate piece rotated 90 degrees about the pivot
    pub fn rotated(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|&(offset, material)| (rotate_offset(offset, self.pivot), material))
            .collect();
        Self {
            cells,
            ..self.clone()
        }
    }

    /// True iff the piece cannot move down one more row
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        !self.shifted(1, 0).is_valid(grid)
    }

    /// Row of the piece's lowest cell
    pub fn lowest_row(&self) -> i32 {
        self.cells
            .iter()
            .map(|&((dr, _), _)| self.anchor.0 + dr)
            .max()
            .unwrap_or(self.anchor.0)
    }
}
