use std::{path::PathBuf, process::ExitCode, sync::mpsc::channel};

use clap::Parser;
use game::game_loop::{GameLoop, Outcome};
use log::LevelFilter;
use terminal::{TerminalError, TerminalScreen};

mod key_listener;
mod logging;
mod terminal;

/// Two-player pong in the terminal. Player 1 uses 'w'/'s', player 2 the arrow keys, 'p' pauses
/// and 'q' quits.
#[derive(Parser)]
struct Cli {
    /// Write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Most detailed level of log records to write
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::setup(cli.log_file.as_deref(), cli.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    let mut screen = match TerminalScreen::init() {
        Ok(screen) => screen,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let (key_tx, key_rx) = channel();
    let (done_tx, done_rx) = channel();
    let key_listener = match key_listener::spawn(key_tx, done_rx) {
        Ok(key_listener) => key_listener,
        Err(err) => {
            let _ = screen.release();
            eprintln!("failed to start key listener: {err}");
            return ExitCode::FAILURE;
        }
    };
    let outcome = GameLoop::new(&mut screen, key_rx).run();
    let _ = done_tx.send(());
    if key_listener.join().is_err() {
        log::error!("key listener panicked");
    }
    let released = screen.release();
    let result = outcome
        .map_err(TerminalError::Draw)
        .and_then(|outcome| released.map(|_| outcome));
    match result {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::GameOver(winner)) => {
            log::info!("{winner} won");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
