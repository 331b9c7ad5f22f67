//! Screen: draws a game snapshot onto a real terminal.
//!
//! The drawing API is intentionally small: one full redraw per frame,
//! queued through crossterm and flushed once. A 10x20 grid is far too small
//! for diffing to pay off. This module never touches the live game state;
//! it consumes the pull-based snapshot only.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::{FIELD_COLS, FIELD_LINES};

/// Top-left of the field border in terminal coordinates.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;

/// Terminal columns per field cell (compensates the glyph aspect ratio).
const CELL_W: u16 = 2;

/// Column where the side panel (next preview, score) starts.
const PANEL_X: u16 = ORIGIN_X + (FIELD_COLS as u16) * CELL_W + 6;

pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Ring the terminal bell (the row-cleared sound cue).
    pub fn bell(&mut self) -> Result<()> {
        self.stdout.queue(Print('\u{7}'))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Draw one frame from a snapshot.
    pub fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_border()?;
        self.draw_field(snap)?;
        self.draw_active(snap)?;
        self.draw_panel(snap)?;

        if snap.game_over {
            self.draw_game_over()?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_border(&mut self) -> Result<()> {
        let w = (FIELD_COLS as u16) * CELL_W;
        let h = FIELD_LINES as u16;

        self.stdout.queue(SetForegroundColor(Color::Grey))?;
        self.stdout.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y))?;
        self.stdout.queue(Print('┌'))?;
        for _ in 0..w {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┐'))?;

        for dy in 0..h {
            self.stdout.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + 1 + dy))?;
            self.stdout.queue(Print('│'))?;
            self.stdout
                .queue(cursor::MoveTo(ORIGIN_X + 1 + w, ORIGIN_Y + 1 + dy))?;
            self.stdout.queue(Print('│'))?;
        }

        self.stdout.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + 1 + h))?;
        self.stdout.queue(Print('└'))?;
        for _ in 0..w {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┘'))?;
        Ok(())
    }

    fn draw_field(&mut self, snap: &GameSnapshot) -> Result<()> {
        for (y, row) in snap.field.iter().enumerate() {
            for (x, &color_index) in row.iter().enumerate() {
                if color_index != 0 {
                    self.draw_cell(x as u16, y as u16, color_index)?;
                }
            }
        }
        Ok(())
    }

    fn draw_active(&mut self, snap: &GameSnapshot) -> Result<()> {
        let color_index = snap.active.color.index();
        for p in &snap.active.cells {
            if p.x >= 0 && p.y >= 0 {
                self.draw_cell(p.x as u16, p.y as u16, color_index)?;
            }
        }
        Ok(())
    }

    /// Fill one field cell (two terminal columns) with a colored block.
    fn draw_cell(&mut self, x: u16, y: u16, color_index: u8) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(
            ORIGIN_X + 1 + x * CELL_W,
            ORIGIN_Y + 1 + y,
        ))?;
        self.stdout
            .queue(SetForegroundColor(palette_color(color_index)))?;
        self.stdout.queue(Print("██"))?;
        Ok(())
    }

    fn draw_panel(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(cursor::MoveTo(PANEL_X, ORIGIN_Y + 1))?;
        self.stdout.queue(Print("Next"))?;

        let color = palette_color(snap.next.color.index());
        self.stdout.queue(SetForegroundColor(color))?;
        for p in &snap.next.cells {
            // Preview cells sit in the 4x2 spawn box; draw them as-is.
            self.stdout.queue(cursor::MoveTo(
                PANEL_X + (p.x as u16) * CELL_W,
                ORIGIN_Y + 3 + p.y as u16,
            ))?;
            self.stdout.queue(Print("██"))?;
        }

        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(cursor::MoveTo(PANEL_X, ORIGIN_Y + 7))?;
        self.stdout.queue(Print(format!("Score: {}", snap.score)))?;
        Ok(())
    }

    fn draw_game_over(&mut self) -> Result<()> {
        let text = " GAME OVER ";
        let w = (FIELD_COLS as u16) * CELL_W;
        let x = ORIGIN_X + 1 + w.saturating_sub(text.len() as u16) / 2;
        let y = ORIGIN_Y + 1 + (FIELD_LINES as u16) / 2;

        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a block color index (1..=7) to a terminal color.
pub fn palette_color(index: u8) -> Color {
    match index {
        1 => Color::Cyan,
        2 => Color::Yellow,
        3 => Color::Magenta,
        4 => Color::Green,
        5 => Color::Red,
        6 => Color::Blue,
        7 => Color::DarkYellow,
        _ => Color::White,
    }
}
