//! A snake that crawls around the terminal.
//!
//! The game is driven from two sides: a fixed-interval timer calls
//! [`game::SnakeGame::step`], while a separate input thread only ever
//! touches the held [`snake::SharedDirection`].

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod render;
pub mod snake;
pub mod term;

pub type TermInt = u16;

/// A terminal position `(column, row)`, 1-based like ANSI cursor addressing.
pub type Cell = (TermInt, TermInt);
