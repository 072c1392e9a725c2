//! Cursor and viewport state in display-row space.

/// Cursor position over the wrapped display rows.
///
/// `abs_x` is a 1-based column within the current display row and may sit
/// one past the row's last character. `abs_y` is a 0-based index into the
/// display rows of the whole buffer, independent of scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub abs_x: usize,
    pub abs_y: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { abs_x: 1, abs_y: 0 }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// The window of display rows currently rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible display row.
    pub scroll_offset: usize,
    /// Number of text rows on screen (the status line is not counted).
    pub visible_height: usize,
    /// Width in columns, which is also the wrap width.
    pub visible_width: usize,
}

impl Viewport {
    /// Keep `scroll_offset` within `[0, max(0, rows - visible_height)]`.
    pub fn clamp_scroll(&mut self, rows: usize) {
        let max = rows.saturating_sub(self.visible_height);
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    /// Whether a display row falls inside the rendered window.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.scroll_offset && row < self.scroll_offset + self.visible_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll_upper_bound() {
        let mut view = Viewport {
            scroll_offset: 50,
            visible_height: 10,
            visible_width: 80,
        };
        view.clamp_scroll(30);
        assert_eq!(view.scroll_offset, 20);
    }

    #[test]
    fn test_clamp_scroll_fewer_rows_than_height() {
        let mut view = Viewport {
            scroll_offset: 3,
            visible_height: 10,
            visible_width: 80,
        };
        view.clamp_scroll(5);
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn test_contains_band() {
        let view = Viewport {
            scroll_offset: 4,
            visible_height: 3,
            visible_width: 80,
        };
        assert!(!view.contains(3));
        assert!(view.contains(4));
        assert!(view.contains(6));
        assert!(!view.contains(7));
    }
}
