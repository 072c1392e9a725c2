//! Blocking input with resize notification.

use anyhow::Result;
use crossterm::event::{self, Event};

use ved_keyboard::{translate, Key};

/// One unit of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal was resized; the caller starts a fresh frame and picks
    /// up the new size from its per-frame poll.
    Resize,
}

/// Block until the next key press or resize.
///
/// Unmapped keys, key releases, and non-keyboard events are consumed
/// silently so the editor loop only ever wakes up for input it acts on.
pub fn read_event() -> Result<InputEvent> {
    loop {
        match event::read()? {
            Event::Key(key) => {
                if let Some(key) = translate(key) {
                    return Ok(InputEvent::Key(key));
                }
            }
            Event::Resize(_, _) => return Ok(InputEvent::Resize),
            _ => {}
        }
    }
}
