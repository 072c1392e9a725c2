//! Ex-style command line evaluation.

/// Parsed outcome of a committed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// `q` — quit, refused while the buffer is dirty.
    Quit,
    /// `q!` — quit unconditionally, discarding changes.
    QuitForce,
    /// `w` — write the buffer.
    Write,
    /// `wq` — write, then quit.
    WriteQuit,
    /// `wq!` — write, then quit unconditionally.
    WriteQuitForce,
    Unknown(String),
}

pub fn parse(input: &str) -> CommandAction {
    match input {
        "q" => CommandAction::Quit,
        "q!" => CommandAction::QuitForce,
        "w" => CommandAction::Write,
        "wq" => CommandAction::WriteQuit,
        "wq!" => CommandAction::WriteQuitForce,
        other => CommandAction::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(parse("q"), CommandAction::Quit);
        assert_eq!(parse("q!"), CommandAction::QuitForce);
        assert_eq!(parse("w"), CommandAction::Write);
        assert_eq!(parse("wq"), CommandAction::WriteQuit);
        assert_eq!(parse("wq!"), CommandAction::WriteQuitForce);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(parse(""), CommandAction::Unknown(String::new()));
        assert_eq!(parse("x"), CommandAction::Unknown("x".to_string()));
        assert_eq!(parse(" q"), CommandAction::Unknown(" q".to_string()));
    }
}
