//! The game proper: board geometry, the snake, food, collisions, and the
//! state machine that ties them together one tick at a time.
//!
//! Nothing in here knows about terminals or clocks.  A driver calls
//! [`Game::tick()`] at a fixed period, forwards direction requests to
//! [`Game::set_direction()`], and draws the game through a [`Surface`].
mod collision;
mod direction;
mod food;
mod grid;
mod snake;
mod surface;
pub(crate) use self::collision::Collision;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::GridExhausted;
pub(crate) use self::grid::{Cell, Grid, Pixel};
pub(crate) use self::snake::Snake;
pub(crate) use self::surface::{Surface, Tile};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, trace};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,

    /// The direction the next tick will move the snake in
    direction: Direction,

    /// The direction the last tick moved the snake in.  Direction requests
    /// are checked against this as well as against `direction`, so that two
    /// quick turns between ticks can't reverse the snake into itself.
    heading: Direction,

    status: Status,

    /// Fruits eaten during the current life
    score: u32,

    /// Highest score reached since the program started
    best_score: u32,

    /// Number of times the snake has crashed
    deaths: u32,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Game::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a stopped game on `grid`.  Call [`Game::start()`] to place the
    /// snake and the food.
    pub(crate) fn new_with_rng(grid: Grid, rng: R) -> Game<R> {
        Game {
            rng,
            grid,
            snake: Snake::default(),
            food: None,
            direction: Direction::Right,
            heading: Direction::Right,
            status: Status::Stopped,
            score: 0,
            best_score: 0,
            deaths: 0,
        }
    }

    /// Put a one-cell snake at the spawn point facing right, place the food,
    /// and start running.
    pub(crate) fn start(&mut self) {
        self.direction = Direction::Right;
        self.heading = Direction::Right;
        self.score = 0;
        self.snake = Snake::new(self.grid.spawn_point());
        match self.place_food() {
            Ok(()) => {
                self.status = Status::Running;
                info!(
                    head = ?self.grid.spawn_point(),
                    food = ?self.food,
                    "Game started"
                );
            }
            Err(e) => self.win(e),
        }
    }

    /// Remove the snake and the food and stop the game
    pub(crate) fn stop(&mut self) {
        self.snake.clear();
        self.food = None;
        self.status = Status::Stopped;
        debug!("Game stopped");
    }

    pub(crate) fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Request that the snake move in `direction` from the next tick on.
    ///
    /// The request is ignored if the game is not running or if it is the
    /// opposite of the current direction.  It is also ignored if it is the
    /// opposite of the direction the last tick moved in, so that two quick
    /// turns between ticks can't reverse the snake onto itself.  Of the
    /// requests accepted between two ticks, the last one takes effect.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.is_running()
            || direction == self.direction.opposite()
            || direction == self.heading.opposite()
        {
            return;
        }
        if direction != self.direction {
            debug!(from = %self.direction, to = %direction, "Direction changed");
            self.direction = direction;
        }
    }

    /// Advance the game by one step
    pub(crate) fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Idle;
        }
        let Some(head) = self.snake.head() else {
            return Tick::Idle;
        };
        let new_head = head.step(self.direction);
        let grow = self.food == Some(new_head);
        let vacated = self.snake.advance(new_head, grow);
        if grow {
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            debug!(at = ?new_head, score = self.score, "Food eaten");
            if let Err(e) = self.place_food() {
                self.win(e);
                return Tick::Won;
            }
        }
        if let Some(collision) = collision::detect(&self.snake, self.grid) {
            self.deaths += 1;
            info!(
                at = ?new_head,
                length = self.snake.len(),
                score = self.score,
                "Snake {collision}; restarting"
            );
            self.restart();
            return Tick::Died(collision);
        }
        self.heading = self.direction;
        trace!(head = ?new_head, tail = ?self.snake.tail(), ?vacated, "Tick");
        if grow {
            Tick::Ate
        } else {
            Tick::Moved
        }
    }

    fn place_food(&mut self) -> Result<(), GridExhausted> {
        let occupied = self.snake.cells().collect::<HashSet<_>>();
        self.food = None;
        self.food = Some(food::respawn(&mut self.rng, &occupied, self.grid)?);
        Ok(())
    }

    fn win(&mut self, reason: GridExhausted) {
        self.status = Status::Won;
        info!(length = self.snake.len(), score = self.score, "{reason}; game won");
    }
}

impl<R> Game<R> {
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn best_score(&self) -> u32 {
        self.best_score
    }

    pub(crate) fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Draw the food and the snake onto `surface`, one square per cell.  The
    /// head is drawn last.
    pub(crate) fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let side = self.grid.cell_size();
        if let Some(food) = self.food {
            surface.fill_square(self.grid.cell_to_pixel(food), side, Tile::Food);
        }
        for cell in self.snake.cells().skip(1) {
            surface.fill_square(self.grid.cell_to_pixel(cell), side, Tile::SnakeBody);
        }
        if let Some(head) = self.snake.head() {
            surface.fill_square(self.grid.cell_to_pixel(head), side, Tile::SnakeHead);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Stopped,
    Running,
    /// The snake has filled the board and there is nowhere left to put food.
    Won,
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game isn't running, so nothing happened
    Idle,
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The snake crashed and the game was restarted
    Died(Collision),
    Won,
}
