use std::process::exit;
use std::sync::mpsc;

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use term_snake::config::Config;
use term_snake::error::SnakeError;
use term_snake::game::{Ending, GameState, SnakeGame};
use term_snake::snake::Bounds;
use term_snake::term::TermManager;
use term_snake::{input, logger};

fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(SnakeError::Cli(e)) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    logger::init_from_env()?;
    info!("starting with a tick every {:?}", config.interval);

    let mut term = TermManager::new();
    term.setup()?;

    let ending = play(&mut term, config);

    // Always try to restore terminal state before printing.
    let restored = term.restore();
    let ending = ending?;
    restored?;

    println!("Game over");
    println!("Your score: {}", ending.score());
    Ok(())
}

fn play(term: &mut TermManager, config: Config) -> Result<Ending> {
    let (columns, rows) = term.size()?;
    let state = GameState::new(Bounds::new(columns, rows), StdRng::from_entropy());

    let (tx, rx) = mpsc::channel();
    input::spawn(state.direction().clone(), tx);

    let mut game = SnakeGame::new(state, term);
    game.start()?;
    Ok(game.run(config.interval, &rx)?)
}
