//! Keyboard event translation for ved.
//!
//! Converts crossterm key events into the editor's key alphabet. Escape
//! sequence disambiguation (a lone Esc versus the opening byte of an
//! arrow sequence) happens inside crossterm's event decoder with a
//! bounded wait, so the editor only ever sees fully resolved keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A fully resolved input key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Esc,
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Translate a crossterm key event.
///
/// Key releases and Ctrl/Alt chords are not part of the key map and
/// return `None`; Shift is allowed through so shifted characters
/// (`:`, `?`, `N`, ...) arrive as plain `Key::Char`s.
pub fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match event.code {
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_char() {
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(translate(event), Some(Key::Char('j')));
    }

    #[test]
    fn test_shifted_char_passes_through() {
        let event = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT);
        assert_eq!(translate(event), Some(Key::Char(':')));
    }

    #[test]
    fn test_ctrl_chord_ignored() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(event), None);
    }

    #[test]
    fn test_arrows_and_escape() {
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(Key::Up)
        );
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Key::Esc)
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate(event), None);
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(translate(event), None);
    }
}
