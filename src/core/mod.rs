//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the duel rules, state management, and timing.
//! It has zero dependencies on UI, input devices, or I/O; the frontend
//! only ever sees snapshots.

pub mod board;
pub mod duel;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::PlayerBoard;
pub use duel::Duel;
pub use grid::Grid;
pub use piece::Trio;
pub use snapshot::{BoardSnapshot, DuelSnapshot};
