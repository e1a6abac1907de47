//! Terminal duel runner (default binary).
//!
//! Owns the frame loop: polls keyboard input with a timeout until the next
//! tick, routes mapped events into the duel, and flushes the rendered
//! snapshot every frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use minefall::config::DuelConfig;
use minefall::core::snapshot::DuelSnapshot;
use minefall::core::Duel;
use minefall::input::{handle_key_press, handle_key_release, should_quit, SoftDropTracker};
use minefall::term::{DuelView, TerminalRenderer, Viewport};
use minefall::types::{PlayerAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seeded_config() -> DuelConfig {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    DuelConfig {
        seeds: [now, now.wrapping_add(0x9E37_79B9)],
        ..DuelConfig::default()
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut duel = Duel::new(seeded_config())?;
    let view = DuelView::default();
    let mut tracker = SoftDropTracker::new();
    let mut snapshot = DuelSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        duel.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if key.kind == KeyEventKind::Press && should_quit(key) {
                            return Ok(());
                        }

                        if let Some(ev) = handle_key_press(key) {
                            if ev.action == PlayerAction::SoftDropStart {
                                // Presses and auto-repeats feed the hold
                                // tracker; only the initial press starts.
                                if let Some(start) = tracker.press(ev.player) {
                                    duel.handle_event(start);
                                }
                            } else if key.kind == KeyEventKind::Press {
                                if ev.action == PlayerAction::Restart {
                                    tracker.reset();
                                }
                                duel.handle_event(ev);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(ev) = handle_key_release(key) {
                            if let Some(end) = tracker.release(ev.player) {
                                duel.handle_event(end);
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for ev in tracker.update(TICK_MS) {
                duel.handle_event(ev);
            }
            duel.tick(TICK_MS);
        }
    }
}
