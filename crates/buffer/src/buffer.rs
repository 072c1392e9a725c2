//! Logical-line text storage with load/save and dirty tracking.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Text buffer backed by a vector of logical lines.
///
/// The buffer is never empty in steady state: an empty or absent file is
/// represented as a single empty logical line. Every content mutation
/// sets the dirty flag; only a successful [`save`](Self::save) clears it.
#[derive(Debug)]
pub struct TextBuffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl TextBuffer {
    /// Load a buffer from a file.
    ///
    /// Lines are split on newline boundaries; a trailing newline does not
    /// produce a trailing empty line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        Ok(Self {
            lines,
            path: Some(path.to_path_buf()),
            dirty: false,
        })
    }

    /// Create a buffer from in-memory lines, with no backing file.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            lines,
            path: None,
            dirty: false,
        }
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Length of a line in characters. Out-of-range lines count as empty.
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |l| l.chars().count())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the buffer has unsaved mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Insert a character at a character offset within a line.
    pub fn insert_char(&mut self, line: usize, offset: usize, ch: char) {
        if let Some(text) = self.lines.get_mut(line) {
            let at = byte_offset(text, offset);
            text.insert(at, ch);
            self.dirty = true;
        }
    }

    /// Split a line at a character offset into two adjacent lines.
    pub fn split_line(&mut self, line: usize, offset: usize) {
        if let Some(text) = self.lines.get_mut(line) {
            let at = byte_offset(text, offset);
            let rest = text.split_off(at);
            self.lines.insert(line + 1, rest);
            self.dirty = true;
        }
    }

    /// Remove the character at a character offset within a line.
    ///
    /// Offsets at or past the end of the line are a no-op.
    pub fn remove_char(&mut self, line: usize, offset: usize) {
        if let Some(text) = self.lines.get_mut(line) {
            let at = byte_offset(text, offset);
            if at < text.len() {
                text.remove(at);
                self.dirty = true;
            }
        }
    }

    /// Remove a whole line.
    ///
    /// Returns `true` when removing the last remaining line collapsed the
    /// buffer back to its single-empty-line steady state.
    pub fn remove_line(&mut self, line: usize) -> bool {
        if line < self.lines.len() {
            self.lines.remove(line);
            self.dirty = true;
        }
        if self.lines.is_empty() {
            self.lines.push(String::new());
            true
        } else {
            false
        }
    }

    /// Write the buffer to its backing file.
    ///
    /// Lines are joined with a single `\n` and no trailing newline is
    /// added. The dirty flag is cleared only on success; a write failure
    /// propagates to the caller.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.as_ref().context("buffer has no file path")?;
        fs::write(path, self.lines.join("\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.dirty = false;
        Ok(())
    }
}

/// Byte position of the `offset`-th character, clamped to the line end.
fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(at, _)| at)
}
