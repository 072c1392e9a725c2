//! Cursor movement over display rows, with incremental scrolling.
//!
//! All operations clamp rather than fail, preserving the invariants
//! `1 <= abs_x <= row_len + 1` and `0 <= abs_y < rows`. The scroll
//! policy is incremental: a vertical step moves `scroll_offset` by at
//! most one row, and only when the cursor leaves the band
//! `[scroll_offset, scroll_offset + visible_height - 1)`.

use crate::display::DisplayMap;
use crate::viewport::{Cursor, Viewport};

pub fn move_left(cursor: &mut Cursor) {
    if cursor.abs_x > 1 {
        cursor.abs_x -= 1;
    }
}

pub fn move_right(cursor: &mut Cursor, display: &DisplayMap) {
    let max = display.row_len(cursor.abs_y) + 1;
    if cursor.abs_x < max {
        cursor.abs_x += 1;
    }
}

pub fn move_up(cursor: &mut Cursor, view: &mut Viewport, display: &DisplayMap) {
    if cursor.abs_y > 0 {
        cursor.abs_y -= 1;
    }
    if cursor.abs_y < view.scroll_offset {
        view.scroll_offset -= 1;
    }
    clamp_column(cursor, display);
}

pub fn move_down(cursor: &mut Cursor, view: &mut Viewport, display: &DisplayMap) {
    let max = display.rows().saturating_sub(1);
    if cursor.abs_y < max {
        cursor.abs_y += 1;
    }
    if view.visible_height > 1
        && cursor.abs_y >= view.scroll_offset + view.visible_height - 1
    {
        view.scroll_offset += 1;
        view.clamp_scroll(display.rows());
    }
    clamp_column(cursor, display);
}

pub fn move_page_up(cursor: &mut Cursor, view: &mut Viewport, display: &DisplayMap) {
    cursor.abs_y = cursor.abs_y.saturating_sub(view.visible_height);
    view.scroll_offset = view.scroll_offset.saturating_sub(view.visible_height);
    clamp_column(cursor, display);
}

pub fn move_page_down(cursor: &mut Cursor, view: &mut Viewport, display: &DisplayMap) {
    let max = display.rows().saturating_sub(1);
    cursor.abs_y = (cursor.abs_y + view.visible_height).min(max);
    view.scroll_offset += view.visible_height;
    view.clamp_scroll(display.rows());
    clamp_column(cursor, display);
}

/// Move to column 1 of the current display row.
pub fn move_head(cursor: &mut Cursor) {
    cursor.abs_x = 1;
}

/// Move one past the last character of the current display row.
pub fn move_tail(cursor: &mut Cursor, display: &DisplayMap) {
    cursor.abs_x = display.row_len(cursor.abs_y) + 1;
}

/// Whether the cursor sits on the last display row.
///
/// This deliberately counts display rows, not logical lines: gating
/// downward movement on the logical line count would make trailing
/// wrapped segments of the final line unreachable.
pub fn at_bottom(cursor: &Cursor, display: &DisplayMap) -> bool {
    cursor.abs_y + 1 >= display.rows()
}

/// Re-clamp `abs_x` to the current row, after vertical movement.
pub fn clamp_column(cursor: &mut Cursor, display: &DisplayMap) {
    let max = display.row_len(cursor.abs_y) + 1;
    cursor.abs_x = cursor.abs_x.clamp(1, max);
}

/// Enforce all cursor and scroll invariants against the current map.
///
/// Run once per frame after the map is rebuilt, and after any mutation
/// that may have changed row counts.
pub fn clamp_cursor(cursor: &mut Cursor, view: &mut Viewport, display: &DisplayMap) {
    let max = display.rows().saturating_sub(1);
    if cursor.abs_y > max {
        cursor.abs_y = max;
    }
    clamp_column(cursor, display);
    view.clamp_scroll(display.rows());
}

/// Minimally adjust the scroll offset so the cursor row is visible.
///
/// A no-op while the cursor is inside the viewport band; otherwise the
/// offset is clamped to the nearest position that shows the row, never
/// recentred.
pub fn scroll_into_view(cursor: &Cursor, view: &mut Viewport) {
    if view.visible_height == 0 {
        return;
    }
    if cursor.abs_y < view.scroll_offset {
        view.scroll_offset = cursor.abs_y;
    } else if cursor.abs_y >= view.scroll_offset + view.visible_height {
        view.scroll_offset = cursor.abs_y + 1 - view.visible_height;
    }
}
