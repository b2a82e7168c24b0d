use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::error::SnakeError;
use crate::grid::OccupancyGrid;
use crate::input::Control;
use crate::render::{Renderer, Screen};
use crate::snake::{Bounds, Direction, SharedDirection};
use crate::Cell;

pub const START_CELL: Cell = (0, 2);
pub const START_DIRECTION: Direction = Direction::Right;

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake crawled one cell; the vacated tail, if any, waits in the discard slot.
    Moved { head: Cell },
    /// The snake ate the food at `head` and grew by one.
    Ate { head: Cell, score: usize },
    /// The snake ran into itself.
    GameOver { score: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Food rolled at the start of this tick.
    pub food_placed: Option<Cell>,
    pub outcome: StepOutcome,
}

/// Why the game stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Collided { score: usize },
    Quit { score: usize },
}

impl Ending {
    pub fn score(&self) -> usize {
        match *self {
            Ending::Collided { score } | Ending::Quit { score } => score,
        }
    }
}

pub struct GameState<R> {
    body: VecDeque<Cell>,
    target_len: usize,
    direction: SharedDirection,
    food: Option<Cell>,
    grid: OccupancyGrid,
    discard: Option<Cell>,
    bounds: Bounds,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn new(bounds: Bounds, rng: R) -> Self {
        let mut grid = OccupancyGrid::new();
        grid.mark(START_CELL);

        GameState {
            body: VecDeque::from(vec![START_CELL]),
            target_len: 1,
            direction: SharedDirection::new(START_DIRECTION),
            food: None,
            grid,
            discard: None,
            bounds,
            rng,
        }
    }

    /// Advances the snake by one cell in the held direction.
    pub fn step(&mut self) -> Tick {
        let food_placed = match self.food {
            Some(_) => None,
            None => {
                let cell = self.bounds.random_cell(&mut self.rng);
                debug!("food at {:?}", cell);
                self.food = Some(cell);
                Some(cell)
            }
        };

        let head = self.bounds.step(self.head(), self.direction.get());

        let outcome = if self.food == Some(head) {
            self.eat(head)
        } else if self.grid.is_occupied(head) {
            info!("crashed at {:?} with length {}", head, self.body.len());
            StepOutcome::GameOver { score: self.score() }
        } else {
            self.crawl(head)
        };

        Tick { food_placed, outcome }
    }

    /// Puts the food somewhere specific, replacing any food already out.
    pub fn place_food(&mut self, cell: Cell) {
        self.food = Some(cell);
    }

    pub fn resize(&mut self, bounds: Bounds) {
        debug!("playfield resized to {:?}", bounds);
        self.bounds = bounds;
    }

    /// Hands the vacated tail cell to whoever erases it. Only returns it once.
    pub fn take_discard(&mut self) -> Option<Cell> {
        self.discard.take()
    }

    pub fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or(START_CELL)
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn score(&self) -> usize {
        self.target_len - 1
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn discard(&self) -> Option<Cell> {
        self.discard
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn direction(&self) -> &SharedDirection {
        &self.direction
    }

    ///////////////////////////////////////////////////////////////////////////

    fn eat(&mut self, head: Cell) -> StepOutcome {
        self.food = None;
        self.grid.mark(head);
        self.body.push_front(head);
        self.target_len += 1;
        info!("ate at {:?}, score {}", head, self.score());

        StepOutcome::Ate { head, score: self.score() }
    }

    fn crawl(&mut self, head: Cell) -> StepOutcome {
        self.grid.mark(head);

        if self.body.len() == self.target_len {
            if let Some(tail) = self.body.pop_back() {
                self.grid.clear(tail);
                self.discard = Some(tail);
            }
        }

        self.body.push_front(head);
        StepOutcome::Moved { head }
    }
}

/// The state together with the screen it is drawn on.
pub struct SnakeGame<S, R> {
    state: GameState<R>,
    renderer: Renderer<S>,
}

impl<S: Screen, R: Rng> SnakeGame<S, R> {
    pub fn new(state: GameState<R>, screen: S) -> Self {
        SnakeGame { state, renderer: Renderer::new(screen) }
    }

    /// Draws the opening frame.
    pub fn start(&mut self) -> Result<(), SnakeError> {
        self.renderer.draw_frame(self.state.head(), self.state.score())?;
        Ok(())
    }

    /// Runs one tick and draws what it changed.
    pub fn step(&mut self) -> Result<StepOutcome, SnakeError> {
        let tick = self.state.step();

        if let Some(food) = tick.food_placed {
            self.renderer.draw_food(food)?;
        }

        match tick.outcome {
            StepOutcome::Moved { head } => {
                let discard = self.state.take_discard();
                self.renderer.draw_move(discard, head)?;
            }
            StepOutcome::Ate { score, .. } => self.renderer.draw_score(score)?,
            StepOutcome::GameOver { .. } => {}
        }

        Ok(tick.outcome)
    }

    /// Ticks every `interval` until the snake crashes or a quit arrives.
    pub fn run(&mut self, interval: Duration, controls: &Receiver<Control>) -> Result<Ending, SnakeError> {
        let mut next_tick = Instant::now() + interval;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            match controls.recv_timeout(timeout) {
                Ok(Control::Quit) => {
                    info!("quit with score {}", self.state.score());
                    return Ok(Ending::Quit { score: self.state.score() });
                }
                Ok(Control::Resize(columns, rows)) => self.state.resize(Bounds::new(columns, rows)),
                Ok(Control::Failed(e)) => return Err(SnakeError::Io(e)),
                Err(RecvTimeoutError::Timeout) => {}
                // Without input there is no way to quit, so stop here too.
                Err(RecvTimeoutError::Disconnected) => return Err(SnakeError::InputClosed),
            }

            if Instant::now() < next_tick {
                continue;
            }
            next_tick = Instant::now() + interval;

            if let StepOutcome::GameOver { score } = self.step()? {
                return Ok(Ending::Collided { score });
            }
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    pub fn screen(&self) -> &S {
        self.renderer.screen()
    }
}
