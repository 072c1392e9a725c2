//! Logical-line text buffer for ved.
//!
//! Provides text storage keyed by logical lines, soft wrapping into
//! display rows, cursor and viewport movement in display space, and
//! wraparound regex search over logical lines.

mod buffer;
mod display;
pub mod motion;
mod search;
mod viewport;
mod wrap;

pub use buffer::TextBuffer;
pub use display::{DisplayMap, RowRef};
pub use search::{find_backward, find_forward, Pattern, SearchHit};
pub use viewport::{Cursor, Viewport};
pub use wrap::wrap_line;
