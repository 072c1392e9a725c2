//! Frame drawing and cursor placement.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};

/// Renderer over stdout.
///
/// Drawing calls are queued and sent in one batch by [`flush`](Self::flush)
/// to avoid flicker from partially drawn frames.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Current terminal size as `(columns, rows)`, polled per frame.
    pub fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((cols as usize, rows as usize))
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Draw one display row at 0-based screen row `y`, space padded to
    /// the full width so stale content never shows through.
    pub fn draw_row(&mut self, y: usize, text: &str, width: usize) -> Result<()> {
        queue!(
            self.out,
            MoveTo(0, y as u16),
            Print(pad_line(text, width))
        )?;
        Ok(())
    }

    /// Draw the status line: `left` anchored at column 1, `right`
    /// right-aligned. When both do not fit, the left side wins.
    pub fn draw_status(&mut self, y: usize, left: &str, right: &str, width: usize) -> Result<()> {
        queue!(
            self.out,
            MoveTo(0, y as u16),
            Print(compose_status(left, right, width))
        )?;
        Ok(())
    }

    /// Park the terminal cursor at a 1-based `(x, y)` position.
    pub fn place_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        let col = x.saturating_sub(1).min(u16::MAX as usize) as u16;
        let row = y.saturating_sub(1).min(u16::MAX as usize) as u16;
        queue!(self.out, MoveTo(col, row))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn pad_line(text: &str, width: usize) -> String {
    let mut line: String = text.chars().take(width).collect();
    let used = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - used));
    line
}

fn compose_status(left: &str, right: &str, width: usize) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if !right.is_empty() && left_len + right_len + 1 <= width {
        let gap = width - left_len - right_len;
        format!("{left}{}{right}", " ".repeat(gap))
    } else {
        pad_line(left, width)
    }
}
