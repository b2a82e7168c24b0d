use std::env;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::SnakeError;

/// Names the file to log into. The terminal itself is the game board, so
/// nothing is logged unless this is set.
pub const LOG_ENV: &str = "TERM_SNAKE_LOG";

/// Installs a file logger if `TERM_SNAKE_LOG` is set. Returns whether one was installed.
pub fn init_from_env() -> Result<bool, SnakeError> {
    let path = match env::var_os(LOG_ENV) {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(false),
    };

    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    Ok(true)
}
