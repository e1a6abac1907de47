//! Terminal rendering module.
//!
//! Renders duel snapshots into a simple framebuffer that is flushed to a
//! terminal backend. The simulation core never appears here directly;
//! everything is drawn from read-only snapshots.

pub mod duel_view;
pub mod fb;
pub mod renderer;

pub use duel_view::{DuelView, Viewport};
pub use fb::{FrameBuffer, Rgb, TermCell};
pub use renderer::TerminalRenderer;
