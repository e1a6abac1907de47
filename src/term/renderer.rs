//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraw per frame; the duel's two small grids are cheap enough that
//! diffing would buy nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Rgb, TermCell};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush one frame to the terminal.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<TermCell> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if !same_style(&current, &cell) {
                    self.apply_style(&cell)?;
                    current = Some(cell);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, cell: &TermCell) -> Result<()> {
        self.stdout.queue(SetAttribute(if cell.bold {
            Attribute::Bold
        } else {
            Attribute::Reset
        }))?;
        self.stdout.queue(SetForegroundColor(to_color(cell.fg)))?;
        self.stdout.queue(SetBackgroundColor(to_color(cell.bg)))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn same_style(current: &Option<TermCell>, cell: &TermCell) -> bool {
    match current {
        Some(c) => c.fg == cell.fg && c.bg == cell.bg && c.bold == cell.bold,
        None => false,
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
