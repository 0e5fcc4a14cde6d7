use std::{error::Error, fmt::Display, io, path::Path};

use log::{LevelFilter, SetLoggerError};

/// Sends log records to `log_file`. Without a file nothing is logged, since the terminal is busy
/// showing the game.
pub fn setup(log_file: Option<&Path>, level: LevelFilter) -> Result<(), SetupLoggingError> {
    let Some(log_file) = log_file else {
        return Ok(());
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(fern::log_file(log_file).map_err(SetupLoggingError::OpenFile)?)
        .apply()
        .map_err(SetupLoggingError::SetLogger)
}

#[derive(Debug)]
pub enum SetupLoggingError {
    OpenFile(io::Error),
    SetLogger(SetLoggerError),
}

impl Display for SetupLoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupLoggingError::OpenFile(err) => write!(f, "failed to open log file: {err}"),
            SetupLoggingError::SetLogger(err) => Display::fmt(err, f),
        }
    }
}

impl Error for SetupLoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SetupLoggingError::OpenFile(err) => Some(err),
            SetupLoggingError::SetLogger(err) => Some(err),
        }
    }
}
