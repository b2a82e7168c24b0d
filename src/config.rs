use std::ffi::OsString;
use std::time::Duration;

use clap::Parser;

use crate::error::SnakeError;

pub const DEFAULT_SPEED_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "term-snake", version, about = "A snake that crawls around your terminal")]
struct Args {
    /// Milliseconds between two steps of the snake
    speed: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config { interval: Duration::from_millis(DEFAULT_SPEED_MS) }
    }
}

impl Config {
    /// Builds the config from a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self, SnakeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;

        let ms = match args.speed {
            None => DEFAULT_SPEED_MS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| SnakeError::InvalidArgument(raw))?,
        };

        Ok(Config { interval: Duration::from_millis(ms) })
    }
}
