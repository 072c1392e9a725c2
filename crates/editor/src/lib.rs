//! Modal editing session for ved.
//!
//! Ties the buffer, display map, viewport, and search together behind a
//! vi-style mode machine, and drives the render/input loop.

mod command;
mod core;
mod mode;
mod text_editing;

pub use crate::command::CommandAction;
pub use crate::core::{LoopControl, Session};
pub use crate::mode::Mode;
