//! Input module - keyboard handling for two players on one keyboard.

pub mod handler;
pub mod map;

pub use handler::SoftDropTracker;
pub use map::{handle_key_press, handle_key_release, should_quit};
