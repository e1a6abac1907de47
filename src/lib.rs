//! Minefall: a two-player falling-block duel.
//!
//! Each player steers an independently falling trio of material blocks on a
//! private grid; blocks lock where they collide and the first grid to
//! overflow loses. The `core` module is a pure, deterministic simulation;
//! `input` and `term` are the thin keyboard/terminal glue around it.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
