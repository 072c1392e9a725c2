use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use ved_config::Config;
use ved_editor::Session;
use ved_logger::LogLevel;
use ved_terminal::{Screen, TerminalGuard};

fn main() -> ExitCode {
    let mut args = env::args_os().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => {
            eprintln!("usage: ved <file>");
            return ExitCode::from(2);
        }
    };

    if !path.is_file() {
        eprintln!("ved: {}: no such file", path.display());
        return ExitCode::from(1);
    }

    if let Err(err) = run(&path) {
        // The guard has already restored the terminal by the time the
        // error propagates here.
        eprintln!("Error: {err:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(path: &Path) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    if let Ok(log_path) = Config::log_file_path() {
        let min_level = config
            .logging
            .min_level
            .parse()
            .unwrap_or(LogLevel::Info);
        ved_logger::init(log_path, min_level);
    }

    let mut session = Session::open(path, &config)?;

    let _guard = TerminalGuard::acquire()?;
    let mut screen = Screen::new();
    session.run(&mut screen)
}
