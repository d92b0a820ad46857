mod direction;
mod grid;
mod placement;
mod snake;
mod stats;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid, GridError};
use self::placement::{place_apple, PlacementExhausted};
use self::snake::Snake;
use self::stats::Stats;
use crate::consts;
use crate::highscore::HighScore;
use log::{debug, info};
use rand::Rng;
use std::fmt;

/// The game state machine: one snake, one apple, and the score-keeping for
/// the current session.
///
/// The game never advances on its own; the driver calls [`Game::tick()`]
/// at a rate of [`Game::speed()`] ticks per second and feeds player input in
/// between ticks.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    base_speed: u32,
    snake: Snake,
    apple: Option<Cell>,
    stats: Stats,

    /// The direction of the snake's most recent move, or its initial facing
    /// if it hasn't moved yet this session.  Turning directly around from
    /// this is not allowed.
    heading: Direction,

    /// The direction the snake moves in on each tick; `None` until the
    /// player picks a direction.
    velocity: Option<Direction>,

    /// Direction chosen since the last tick, to be applied at the start of
    /// the next one
    pending: Option<Direction>,

    phase: Phase,
    high_score: HighScore,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid, base_speed: u32, high_score: HighScore) -> Self {
        Game::new_with_rng(grid, base_speed, high_score, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        grid: Grid,
        base_speed: u32,
        high_score: HighScore,
        rng: R,
    ) -> Game<R> {
        Game {
            rng,
            grid,
            base_speed,
            snake: Snake::new(grid.center(), consts::INITIAL_HEADING, grid),
            apple: None,
            stats: Stats::new(base_speed),
            heading: consts::INITIAL_HEADING,
            velocity: None,
            pending: None,
            phase: Phase::NotStarted,
            high_score,
        }
    }

    /// Begin a new session, discarding any session in progress
    pub(crate) fn start(&mut self) {
        self.snake = Snake::new(self.grid.center(), consts::INITIAL_HEADING, self.grid);
        self.stats = Stats::new(self.base_speed);
        self.heading = consts::INITIAL_HEADING;
        self.velocity = None;
        self.pending = None;
        self.phase = Phase::Running;
        info!(
            "Starting new game on {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
        match place_apple(&mut self.rng, self.grid, &self.snake) {
            Ok(apple) => self.apple = Some(apple),
            Err(PlacementExhausted) => {
                self.apple = None;
                self.end(GameOver::PlacementExhausted);
            }
        }
    }

    /// Steer the snake.  If no session is in progress, a new one is started
    /// first.  A request to turn directly around is ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if matches!(self.phase, Phase::NotStarted | Phase::GameOver(_)) {
            self.start();
        }
        if direction == self.heading.reverse() {
            debug!("Ignoring reversal from {:?} to {direction:?}", self.heading);
            return;
        }
        self.pending = Some(direction);
    }

    /// Advance the simulation by one step.  Does nothing unless the game is
    /// running.
    pub(crate) fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Idle;
        }
        if let Some(direction) = self.pending.take() {
            self.velocity = Some(direction);
            self.heading = direction;
        }
        let Some(direction) = self.velocity else {
            return Tick::Idle;
        };
        let Some(head) = self.snake.advance(direction, self.grid) else {
            return self.end(GameOver::OutOfBounds);
        };
        let eating = self.apple == Some(head);
        if self.snake.would_collide(head, eating) {
            return self.end(GameOver::SelfCollision);
        }
        if eating {
            self.snake.grow();
        }
        self.snake.commit_advance(head);
        if !eating {
            return Tick::Moved;
        }
        self.stats.record_apple(self.base_speed);
        debug!(
            "Ate apple at ({}, {}); score {}, level {}",
            head.x, head.y, self.stats.score, self.stats.level
        );
        match place_apple(&mut self.rng, self.grid, &self.snake) {
            Ok(apple) => {
                self.apple = Some(apple);
                Tick::Ate
            }
            Err(PlacementExhausted) => {
                self.apple = None;
                self.end(GameOver::PlacementExhausted)
            }
        }
    }
}

impl<R> Game<R> {
    /// Pause a running game or resume a paused one
    pub(crate) fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Running,
            Phase::NotStarted | Phase::GameOver(_) => (),
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Current tick rate in ticks per second
    pub(crate) fn speed(&self) -> u32 {
        self.stats.speed
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snake: self.snake.cells().collect(),
            heading: self.heading,
            apple: self.apple,
            score: self.stats.score,
            level: self.stats.level,
            speed: self.stats.speed,
            high_score: self.high_score.best(),
            phase: self.phase,
        }
    }

    fn end(&mut self, reason: GameOver) -> Tick {
        self.phase = Phase::GameOver(reason);
        info!("Game over: {reason}; final score {}", self.stats.score);
        if self.high_score.submit(self.stats.score) {
            info!("New high score: {}", self.stats.score);
        }
        Tick::Ended(reason)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver(GameOver),
}

/// Why a session ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOver {
    /// The snake's head left the grid
    OutOfBounds,

    /// The snake's head ran into a cell that stays occupied by its body
    SelfCollision,

    /// The snake filled the grid, leaving nowhere for another apple
    PlacementExhausted,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameOver::OutOfBounds => "hit a wall",
            GameOver::SelfCollision => "hit yourself",
            GameOver::PlacementExhausted => "board full",
        };
        f.pad(msg)
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game is not running or the snake has not started moving
    Idle,
    Moved,
    /// The snake moved onto the apple and grew
    Ate,
    Ended(GameOver),
}

impl Tick {
    /// Whether the snake ate an apple on this tick.  A full board only ever
    /// comes from eating the last apple.
    pub(crate) fn ate(self) -> bool {
        matches!(self, Tick::Ate | Tick::Ended(GameOver::PlacementExhausted))
    }
}

/// A read-only picture of the game at one moment, for the renderer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) grid: Grid,
    /// The snake's cells, from tail to head
    pub(crate) snake: Vec<Cell>,
    pub(crate) heading: Direction,
    pub(crate) apple: Option<Cell>,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) speed: u32,
    pub(crate) high_score: u32,
    pub(crate) phase: Phase,
}

impl Snapshot {
    pub(crate) fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub(crate) fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub(crate) fn game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }
}
