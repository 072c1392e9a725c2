//! Terminal collaborators for ved.
//!
//! Owns everything that touches the real terminal: raw-mode lifetime,
//! frame drawing, cursor placement, size polling, and blocking input.
//! The editor core talks to these through plain values and never emits
//! escape sequences itself.

mod guard;
mod input;
mod screen;

pub use guard::TerminalGuard;
pub use input::{read_event, InputEvent};
pub use screen::Screen;
