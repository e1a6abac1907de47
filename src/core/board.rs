//! Board module - one player's grid, falling piece, and gravity rules
//!
//! A `PlayerBoard` owns everything on its side of the duel: the grid of
//! landed blocks, the falling trio, the fall-timer accumulator, and the
//! game-over flag. Every mutation is "compute candidate, validate, commit
//! or discard"; partial moves and partial locks cannot happen.

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::config::BoardConfig;
use crate::core::rng::MaterialDealer;
use crate::core::{Grid, Trio};
use crate::types::{Direction, Material, MAX_PIECE_CELLS};

/// One player's simulation state.
#[derive(Debug, Clone)]
pub struct PlayerBoard {
    config: BoardConfig,
    grid: Grid,
    /// Absent only between lock and spawn, and after game over
    active: Option<Trio>,
    dealer: MaterialDealer,
    /// Gravity accumulator (elapsed ms since the last fall step)
    fall_timer_ms: u32,
    is_soft_dropping: bool,
    game_over: bool,
}

impl PlayerBoard {
    /// Build a board and spawn its first piece.
    ///
    /// Fails fast on malformed configuration; an empty grid always accepts
    /// the first spawn after that.
    pub fn new(config: BoardConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config, seed))
    }

    /// Build from a config that has already passed validation.
    pub(crate) fn from_validated(config: BoardConfig, seed: u32) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let dealer = MaterialDealer::new(config.palette.clone(), seed);

        let mut board = Self {
            config,
            grid,
            active: None,
            dealer,
            fall_timer_ms: 0,
            is_soft_dropping: false,
            game_over: false,
        };
        board.spawn_piece();
        board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Trio> {
        self.active.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.is_soft_dropping
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Spawn a new piece at the top-center anchor.
    ///
    /// Returns false and sets game over when the spawn position is already
    /// occupied; that is the board's terminal condition, not an error.
    pub fn spawn_piece(&mut self) -> bool {
        let mut materials = ArrayVec::<Material, MAX_PIECE_CELLS>::new();
        for _ in 0..self.config.shape.len() {
            materials.push(self.dealer.draw());
        }

        let piece = Trio::new(&self.config.shape, self.config.spawn_anchor(), &materials);
        if !piece.is_valid(&self.grid) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the piece one column left or right.
    ///
    /// Evaluated for the whole piece at once; on any collision the board is
    /// left exactly as it was.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.shifted(0, direction.dc());
        if candidate.is_valid(&self.grid) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Try to rotate the piece 90 degrees about its pivot.
    ///
    /// No wall kicks: an obstructed rotation is discarded outright.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.rotated();
        if candidate.is_valid(&self.grid) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Fall interval with the soft-drop multiplier applied
    pub fn effective_fall_interval_ms(&self) -> u32 {
        if self.is_soft_dropping {
            (self.config.fall_interval_ms / self.config.soft_drop_multiplier).max(1)
        } else {
            self.config.fall_interval_ms
        }
    }

    pub fn soft_drop_start(&mut self) {
        self.is_soft_dropping = true;
    }

    pub fn soft_drop_end(&mut self) {
        self.is_soft_dropping = false;
    }

    /// Advance the gravity accumulator.
    ///
    /// When the accumulator reaches the effective fall interval it resets
    /// and the piece takes one downward step; a blocked step locks the
    /// piece and spawns the next one. Returns true when the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.effective_fall_interval_ms() {
            return false;
        }
        self.fall_timer_ms = 0;

        let candidate = active.shifted(1, 0);
        if candidate.is_valid(&self.grid) {
            self.active = Some(candidate);
        } else {
            self.lock_and_spawn();
        }
        true
    }

    /// Drop the piece straight down and lock it within this call.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active.clone() else {
            return false;
        };

        loop {
            let candidate = piece.shifted(1, 0);
            if candidate.is_valid(&self.grid) {
                piece = candidate;
            } else {
                break;
            }
        }

        self.active = Some(piece);
        self.lock_and_spawn();
        true
    }

    /// Fill a reusable snapshot with this board's visible state.
    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::BoardSnapshot) {
        use crate::core::snapshot::FallingCell;

        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        self.grid.write_codes(&mut out.cells);

        out.falling.clear();
        if let Some(active) = &self.active {
            for (row, col, material) in active.absolute_cells() {
                out.falling.push(FallingCell {
                    row,
                    col,
                    material: material.code(),
                });
            }
        }

        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> crate::core::snapshot::BoardSnapshot {
        let mut s = crate::core::snapshot::BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Write the piece into the grid, then spawn the next one.
    fn lock_and_spawn(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let locked = self.grid.lock_cells(&active.absolute_cells());
        // The active piece is validated on every commit, so the lock target
        // cells are free by invariant.
        debug_assert!(locked, "active piece must lock onto free cells");

        self.fall_timer_ms = 0;
        self.spawn_piece();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_FALL_INTERVAL_MS;

    fn board() -> PlayerBoard {
        PlayerBoard::new(BoardConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_new_board_spawns_at_top_center() {
        let board = board();
        assert!(!board.is_game_over());
        let active = board.active().unwrap();
        assert_eq!(active.anchor(), (0, 4));
    }

    #[test]
    fn test_move_round_trip() {
        let mut board = board();
        let before = board.active().unwrap().clone();

        assert!(board.try_move(Direction::Left));
        assert!(board.try_move(Direction::Right));
        assert_eq!(board.active().unwrap(), &before);
    }

    #[test]
    fn test_move_blocked_at_wall() {
        let mut board = board();

        // Walk to the left wall; the trio's leftmost cell is one column
        // left of the anchor, so the anchor stops at column 1.
        while board.try_move(Direction::Left) {}
        assert_eq!(board.active().unwrap().anchor().1, 1);

        let before = board.active().unwrap().clone();
        assert!(!board.try_move(Direction::Left));
        assert_eq!(board.active().unwrap(), &before);
    }

    #[test]
    fn test_rotate_commits_or_discards() {
        let mut board = board();
        // Clear the top edge first; at row 0 a rotation can swing a cell
        // above the grid.
        board.tick(DEFAULT_FALL_INTERVAL_MS);
        board.tick(DEFAULT_FALL_INTERVAL_MS);
        let before = board.active().unwrap().clone();

        // In open space the rotation commits.
        assert!(board.try_rotate());
        assert_ne!(board.active().unwrap(), &before);

        // Three more rotations restore the original orientation.
        assert!(board.try_rotate());
        assert!(board.try_rotate());
        assert!(board.try_rotate());
        assert_eq!(board.active().unwrap(), &before);
    }

    #[test]
    fn test_rotate_blocked_by_obstacle() {
        let mut board = board();
        // Rotation swings the left cell to directly below the pivot and
        // the below cell to the right of the pivot; plant a block on the
        // right-of-pivot target.
        board.grid_mut().set(0, 5, Some(Material::Rock));
        let before = board.active().unwrap().clone();

        assert!(!board.try_rotate());
        assert_eq!(board.active().unwrap(), &before);
    }

    #[test]
    fn test_gravity_descends_once_per_interval() {
        let mut board = board();

        assert!(!board.tick(DEFAULT_FALL_INTERVAL_MS - 1));
        assert_eq!(board.active().unwrap().anchor(), (0, 4));

        assert!(board.tick(1));
        assert_eq!(board.active().unwrap().anchor(), (1, 4));
    }

    #[test]
    fn test_gravity_walks_to_bottom_then_locks() {
        let mut board = board();

        // Ten full intervals walk the anchor to row 10 (lowest cell row 11).
        for step in 1..=10 {
            assert!(board.tick(DEFAULT_FALL_INTERVAL_MS));
            assert_eq!(board.active().unwrap().anchor().0, step);
        }
        assert_eq!(board.active().unwrap().lowest_row(), 11);

        // The next interval cannot descend: lock and respawn at the top.
        assert!(board.tick(DEFAULT_FALL_INTERVAL_MS));
        assert!(!board.is_game_over());
        assert_eq!(board.active().unwrap().anchor(), (0, 4));
        assert!(board.grid().is_occupied(11, 4));
        assert!(board.grid().is_occupied(10, 4));
        assert!(board.grid().is_occupied(10, 3));
    }

    #[test]
    fn test_soft_drop_shrinks_interval() {
        let mut board = board();
        assert_eq!(board.effective_fall_interval_ms(), 1000);

        board.soft_drop_start();
        assert!(board.is_soft_dropping());
        assert_eq!(board.effective_fall_interval_ms(), 100);

        // One soft-drop interval is enough for a step now.
        assert!(board.tick(100));
        assert_eq!(board.active().unwrap().anchor(), (1, 4));

        board.soft_drop_end();
        assert!(!board.is_soft_dropping());
        assert_eq!(board.effective_fall_interval_ms(), 1000);
    }

    #[test]
    fn test_hard_drop_locks_in_one_call() {
        let mut board = board();

        assert!(board.hard_drop());
        assert!(board.grid().is_occupied(11, 4));
        assert!(board.grid().is_occupied(10, 4));
        assert!(board.grid().is_occupied(10, 3));
        // A fresh piece is already falling.
        assert_eq!(board.active().unwrap().anchor(), (0, 4));
    }

    #[test]
    fn test_spawn_blocked_sets_game_over() {
        let mut board = board();

        // Plant a block on the spawn anchor and force a lock.
        board.grid_mut().set(0, 4, Some(Material::Rock));
        board.hard_drop();

        assert!(board.is_game_over());
        assert!(board.active().is_none());
    }

    #[test]
    fn test_game_over_board_ignores_everything() {
        let mut board = board();
        board.grid_mut().set(0, 4, Some(Material::Rock));
        board.hard_drop();
        assert!(board.is_game_over());

        assert!(!board.tick(10_000));
        assert!(!board.try_move(Direction::Left));
        assert!(!board.try_rotate());
        assert!(!board.hard_drop());
        assert!(board.active().is_none());
    }

    #[test]
    fn test_lock_is_atomic_into_grid() {
        let mut board = board();
        board.hard_drop();

        // Exactly the three trio cells landed.
        let occupied = (0..12)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter(|&(r, c)| board.grid().is_occupied(r, c))
            .count();
        assert_eq!(occupied, 3);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let mut a = PlayerBoard::new(BoardConfig::default(), 777).unwrap();
        let mut b = PlayerBoard::new(BoardConfig::default(), 777).unwrap();

        for _ in 0..5 {
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.grid().cells(), b.grid().cells());
        assert_eq!(a.active(), b.active());
    }
}
