use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use rand::Rng;

use crate::{Cell, TermInt};
use Direction::*;

/// Row 1 holds the score line, the playfield starts below it.
pub const FIRST_ROW: TermInt = 2;
pub const FIRST_COLUMN: TermInt = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Numeric encoding used by the turn guard. 2 is deliberately unused.
    pub fn code(self) -> u8 {
        match self {
            Left => 0,
            Right => 1,
            Up => 3,
            Down => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Left),
            1 => Some(Right),
            3 => Some(Up),
            4 => Some(Down),
            _ => None,
        }
    }

    /// A turn is taken only when the codes are more than one apart.
    ///
    /// This rejects Left<->Right and Up<->Down (and repeating the current
    /// direction), every other turn goes through.
    pub fn accepts(self, next: Direction) -> bool {
        self.code().abs_diff(next.code()) > 1
    }
}

/// Size of the terminal the snake lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    columns: TermInt,
    rows: TermInt,
}

impl Bounds {
    pub fn new(columns: TermInt, rows: TermInt) -> Self {
        Bounds { columns, rows }
    }

    /// Moves `from` one cell towards `dir`, wrapping around every edge.
    ///
    /// Leaving on the left or top lands on the last column/row of the
    /// terminal, leaving on the right or bottom lands on the first playable
    /// column/row.
    pub fn step(&self, from: Cell, dir: Direction) -> Cell {
        let (x, y) = from;

        match dir {
            Left if x <= FIRST_COLUMN => (self.columns, y),
            Left => (x - 1, y),
            Right if x.saturating_add(1) > self.last_column() => (FIRST_COLUMN, y),
            Right => (x + 1, y),
            Up if y <= FIRST_ROW => (x, self.rows),
            Up => (x, y - 1),
            Down if y.saturating_add(1) > self.last_row() => (x, FIRST_ROW),
            Down => (x, y + 1),
        }
    }

    /// A uniformly random playfield cell. Does not look at what is already there.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let x = rng.gen_range(FIRST_COLUMN..=self.last_column().max(FIRST_COLUMN));
        let y = rng.gen_range(FIRST_ROW..=self.last_row().max(FIRST_ROW));
        (x, y)
    }

    fn last_column(&self) -> TermInt {
        self.columns.saturating_sub(1)
    }

    fn last_row(&self) -> TermInt {
        self.rows.saturating_sub(1)
    }
}

/// The held direction, shared between the tick loop and the input thread.
///
/// Written by key presses, read once per tick.
#[derive(Clone, Debug)]
pub struct SharedDirection(Arc<AtomicU8>);

impl SharedDirection {
    pub fn new(direction: Direction) -> Self {
        SharedDirection(Arc::new(AtomicU8::new(direction.code())))
    }

    pub fn get(&self) -> Direction {
        // Only codes produced by Direction::code are ever stored.
        Direction::from_code(self.0.load(Ordering::Acquire)).unwrap_or(Right)
    }

    /// Asks for a turn. Returns whether it was taken; rejected turns are dropped.
    pub fn request(&self, next: Direction) -> bool {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |code| {
                let current = Direction::from_code(code)?;
                current.accepts(next).then(|| next.code())
            })
            .is_ok()
    }
}
