use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    /// The speed argument was not a whole number of milliseconds.
    #[error("Please give a number.")]
    InvalidArgument(String),

    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Writing to the terminal (or the log file) failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("keyboard input stopped")]
    InputClosed,

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
