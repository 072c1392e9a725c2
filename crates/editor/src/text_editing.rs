//! Edit operations resolving the display cursor to logical positions.
//!
//! Each operation translates the display cursor through the current
//! `DisplayMap`, mutates the buffer, rebuilds the map at the same
//! width, then recomputes the cursor from the resulting logical
//! position. Mutations can move wrap boundaries, so the display cursor
//! is always re-derived rather than nudged column by column.

use ved_buffer::{Cursor, DisplayMap, TextBuffer};

/// Insert a character at the cursor and advance past it, crossing onto
/// the next display row when the insertion pushes the position over a
/// wrap boundary.
pub fn insert_char(
    buffer: &mut TextBuffer,
    display: &mut DisplayMap,
    cursor: &mut Cursor,
    ch: char,
) {
    let (line, offset) = display.to_logical(buffer, cursor);
    buffer.insert_char(line, offset, ch);
    display.rebuild(buffer, display.width());
    *cursor = display.from_logical(line, offset + 1);
}

/// Split the current logical line at the cursor.
///
/// The cursor moves to the head of the newly created line.
pub fn insert_newline(buffer: &mut TextBuffer, display: &mut DisplayMap, cursor: &mut Cursor) {
    let (line, offset) = display.to_logical(buffer, cursor);
    buffer.split_line(line, offset);
    display.rebuild(buffer, display.width());
    *cursor = display.from_logical(line + 1, 0);
}

/// Delete the character immediately before the cursor.
///
/// Backspace-like by convention: a cursor at the head of a logical line
/// (offset 0) is a no-op, otherwise the preceding character is removed
/// and the cursor follows it, crossing back onto the previous display
/// row when the deleted character sat on a wrap boundary.
pub fn delete_char(buffer: &mut TextBuffer, display: &mut DisplayMap, cursor: &mut Cursor) {
    let (line, offset) = display.to_logical(buffer, cursor);
    if offset == 0 {
        return;
    }
    buffer.remove_char(line, offset - 1);
    display.rebuild(buffer, display.width());
    *cursor = display.from_logical(line, offset - 1);
}

/// Delete the logical line under the cursor.
///
/// When the buffer collapses to its single-empty-line state the cursor
/// resets to `(1, 0)`. Otherwise `abs_y` moves to the first display row
/// of the line that now occupies the deleted index, or to the last
/// display row of the new final line when the deleted line was last.
pub fn delete_line(buffer: &mut TextBuffer, display: &mut DisplayMap, cursor: &mut Cursor) {
    let (line, _) = display.to_logical(buffer, cursor);
    let collapsed = buffer.remove_line(line);
    display.rebuild(buffer, display.width());

    if collapsed {
        *cursor = Cursor::new();
        return;
    }

    cursor.abs_y = if line < buffer.line_count() {
        display.first_row_of(line)
    } else {
        let last = buffer.line_count() - 1;
        display.first_row_of(last) + display.segment_count(last) - 1
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(lines: &[&str], width: usize) -> (TextBuffer, DisplayMap) {
        let buffer = TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect());
        let mut display = DisplayMap::new();
        display.rebuild(&buffer, width);
        (buffer, display)
    }

    #[test]
    fn test_insert_then_delete_round_trips() {
        let (mut buffer, mut display) = fixture(&["hello"], 80);
        let mut cursor = Cursor { abs_x: 3, abs_y: 0 };

        insert_char(&mut buffer, &mut display, &mut cursor, 'X');
        assert_eq!(buffer.line(0), Some("heXllo"));
        assert_eq!(cursor.abs_x, 4);

        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("hello"));
        assert_eq!(cursor.abs_x, 3);
    }

    #[test]
    fn test_insert_sets_dirty() {
        let (mut buffer, mut display) = fixture(&["hello"], 80);
        let mut cursor = Cursor::new();
        assert!(!buffer.is_dirty());
        insert_char(&mut buffer, &mut display, &mut cursor, '!');
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_delete_char_at_line_head_is_noop() {
        let (mut buffer, mut display) = fixture(&["ab"], 80);
        let mut cursor = Cursor::new();
        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("ab"));
        assert_eq!(cursor.abs_x, 1);
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_delete_char_sets_dirty() {
        let (mut buffer, mut display) = fixture(&["ab"], 80);
        let mut cursor = Cursor { abs_x: 2, abs_y: 0 };
        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("b"));
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let (mut buffer, mut display) = fixture(&["hello world"], 80);
        let mut cursor = Cursor { abs_x: 6, abs_y: 0 };
        insert_newline(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.lines(), ["hello", " world"]);
        assert_eq!(cursor.abs_y, 1);
        assert_eq!(cursor.abs_x, 1);
    }

    #[test]
    fn test_insert_newline_on_wrapped_segment() {
        // Cursor on the second segment of "abcdefgh" wrapped at 3:
        // offset = 1*3 + 2 - 1 = 4, splitting into "abcd" / "efgh".
        let (mut buffer, mut display) = fixture(&["abcdefgh"], 3);
        let mut cursor = Cursor { abs_x: 2, abs_y: 1 };
        insert_newline(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.lines(), ["abcd", "efgh"]);
    }

    #[test]
    fn test_delete_line_single_collapses() {
        let (mut buffer, mut display) = fixture(&["only line"], 80);
        let mut cursor = Cursor { abs_x: 5, abs_y: 0 };
        delete_line(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.lines(), [""]);
        assert_eq!(cursor, Cursor { abs_x: 1, abs_y: 0 });
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_delete_middle_line_lands_on_successor() {
        let (mut buffer, mut display) = fixture(&["aaaaaa", "bb", "cc"], 3);
        // "aaaaaa" wraps to two rows; cursor on "bb" (row 2).
        let mut cursor = Cursor { abs_x: 1, abs_y: 2 };
        delete_line(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.lines(), ["aaaaaa", "cc"]);
        // "cc" now occupies logical index 1, first display row 2.
        assert_eq!(cursor.abs_y, 2);
    }

    #[test]
    fn test_delete_last_line_lands_on_new_final_row() {
        let (mut buffer, mut display) = fixture(&["aaaaaa", "bb"], 3);
        // Cursor on "bb", the last line (row 2).
        let mut cursor = Cursor { abs_x: 1, abs_y: 2 };
        delete_line(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.lines(), ["aaaaaa"]);
        // Last display row of the wrapped final line.
        assert_eq!(cursor.abs_y, 1);
    }

    #[test]
    fn test_insert_advances_across_wrap_boundary() {
        // Inserting at the end of a full first segment lands the cursor
        // on the new second row, after the inserted character.
        let (mut buffer, mut display) = fixture(&["abcd"], 4);
        let mut cursor = Cursor { abs_x: 5, abs_y: 0 };
        insert_char(&mut buffer, &mut display, &mut cursor, 'e');
        assert_eq!(buffer.line(0), Some("abcde"));
        assert_eq!(cursor, Cursor { abs_x: 2, abs_y: 1 });
    }

    #[test]
    fn test_sequential_inserts_stay_in_order_past_the_width() {
        let (mut buffer, mut display) = fixture(&[""], 4);
        let mut cursor = Cursor::new();
        for ch in "abcdef".chars() {
            insert_char(&mut buffer, &mut display, &mut cursor, ch);
        }
        assert_eq!(buffer.line(0), Some("abcdef"));
        assert_eq!(cursor, Cursor { abs_x: 3, abs_y: 1 });
    }

    #[test]
    fn test_sequential_deletes_walk_back_across_wrap_boundary() {
        // From the head of the second segment, two backspaces must
        // remove 'c' then 'b', following the shifting wrap boundary.
        let (mut buffer, mut display) = fixture(&["abcdef"], 3);
        let mut cursor = Cursor { abs_x: 1, abs_y: 1 };
        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("abdef"));
        assert_eq!(cursor, Cursor { abs_x: 3, abs_y: 0 });
        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("adef"));
        assert_eq!(cursor, Cursor { abs_x: 2, abs_y: 0 });
    }

    #[test]
    fn test_delete_char_across_wrap_boundary() {
        // Cursor at the head of the second segment: offset 3, removing
        // the last character of the first segment.
        let (mut buffer, mut display) = fixture(&["abcdef"], 3);
        let mut cursor = Cursor { abs_x: 1, abs_y: 1 };
        delete_char(&mut buffer, &mut display, &mut cursor);
        assert_eq!(buffer.line(0), Some("abdef"));
    }
}
