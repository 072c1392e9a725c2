//! Editor input modes.

/// Input mode of the editor.
///
/// Every dispatch site matches on this exhaustively, so adding a mode
/// is a compile-checked change. Quitting is not a mode: it is signalled
/// to the loop as a result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Command,
    SearchForward,
    SearchBackward,
}

impl Mode {
    /// Prompt glyph shown before the command line, for modes that
    /// accumulate one.
    pub fn prompt(self) -> Option<char> {
        match self {
            Mode::Command => Some(':'),
            Mode::SearchForward => Some('/'),
            Mode::SearchBackward => Some('?'),
            Mode::Normal | Mode::Insert => None,
        }
    }
}
