//! Display-row index: maps wrapped display rows back to logical positions.

use crate::buffer::TextBuffer;
use crate::viewport::Cursor;
use crate::wrap::wrap_line;

/// A display row's position within the logical buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef {
    /// Logical line index.
    pub line: usize,
    /// Which wrapped segment of that line this row is, starting at 0.
    pub segment: usize,
}

/// Derived index over the wrapped buffer.
///
/// Holds one entry per display row, in logical-then-segment order. The
/// map is ephemeral: it must be rebuilt after every buffer mutation or
/// width change, before any coordinate is read from it.
#[derive(Debug, Default)]
pub struct DisplayMap {
    rows: Vec<RowRef>,
    texts: Vec<String>,
    width: usize,
}

impl DisplayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute all display rows from the buffer at the given wrap width.
    pub fn rebuild(&mut self, buffer: &TextBuffer, width: usize) {
        self.width = width.max(1);
        self.rows.clear();
        self.texts.clear();
        for (line, text) in buffer.lines().iter().enumerate() {
            for (segment, chunk) in wrap_line(text, self.width).into_iter().enumerate() {
                self.rows.push(RowRef { line, segment });
                self.texts.push(chunk);
            }
        }
    }

    /// Total number of display rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Wrap width the map was last built with.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_ref(&self, row: usize) -> Option<RowRef> {
        self.rows.get(row).copied()
    }

    /// Text of a display row. Out-of-range rows render as empty.
    pub fn row_text(&self, row: usize) -> &str {
        self.texts.get(row).map_or("", String::as_str)
    }

    /// Length of a display row in characters.
    pub fn row_len(&self, row: usize) -> usize {
        self.row_text(row).chars().count()
    }

    /// First display row occupied by a logical line.
    ///
    /// Rows are in logical order, so this is a single forward scan. A
    /// line index past the end clamps to the last row.
    pub fn first_row_of(&self, line: usize) -> usize {
        self.rows
            .iter()
            .position(|r| r.line == line)
            .unwrap_or_else(|| self.rows.len().saturating_sub(1))
    }

    /// Number of wrapped segments a logical line occupies.
    pub fn segment_count(&self, line: usize) -> usize {
        self.rows.iter().filter(|r| r.line == line).count()
    }

    /// Resolve a display cursor to `(logical_line, char_offset)`.
    ///
    /// The offset is `segment * width + abs_x - 1`, clamped to the length
    /// of the logical line so a cursor past the end resolves to the end.
    pub fn to_logical(&self, buffer: &TextBuffer, cursor: &Cursor) -> (usize, usize) {
        let row = cursor.abs_y.min(self.rows.len().saturating_sub(1));
        let Some(rref) = self.row_ref(row) else {
            return (0, 0);
        };
        let offset = rref.segment * self.width + cursor.abs_x.saturating_sub(1);
        (rref.line, offset.min(buffer.line_len(rref.line)))
    }

    /// Inverse of [`to_logical`](Self::to_logical): the display cursor
    /// for a logical `(line, char_offset)`.
    ///
    /// An offset at the end of a line whose length is an exact multiple
    /// of the width stays on the line's last segment, one column past
    /// its final character, rather than spilling onto the next row.
    pub fn from_logical(&self, line: usize, offset: usize) -> Cursor {
        let width = self.width.max(1);
        let segment = (offset / width).min(self.segment_count(line).saturating_sub(1));
        Cursor {
            abs_x: offset - segment * width + 1,
            abs_y: self.first_row_of(line) + segment,
        }
    }
}
