use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::domain::{Board, CanvasSize, Direction, Point, Snake, SpeedRamp};

/// Outcome of one simulation step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    /// The snake moved (or there was nothing to move yet)
    Running,
    /// The candidate head hit the body; the snake was left as it was
    GameOver,
}

impl Flow {
    pub const fn is_running(self) -> bool {
        matches!(self, Flow::Running)
    }
}

/// GameState holds everything one session of Snake needs.
/// It knows nothing about windows, timers or key codes; the board
/// feeds it canvas sizes, directions and randomness.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    /// Last canvas size reported by a paint
    pub canvas: CanvasSize,
    pub board: Board,
    pub snake: Snake,
    pub food: Option<Point>,
    pub direction: Direction,
    pub score: u32,
    /// Current tick interval in milliseconds
    pub speed_ms: u32,
    pub game_over: bool,
    pub initialized: bool,
    ramp: SpeedRamp,
}

impl GameState {
    /// Create an uninitialized session; nothing is sized until `initialize`
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            canvas: CanvasSize::default(),
            board: Board::default(),
            snake: Snake::default(),
            food: None,
            direction: Direction::default(),
            score: 0,
            speed_ms: config.initial_speed_ms,
            game_over: false,
            initialized: false,
            ramp: SpeedRamp::from_config(&config),
        }
    }

    /// Record the canvas size reported by the host
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    fn board_from_canvas(&self) -> Board {
        Board::from_canvas(self.canvas, self.config.cell_size, self.config.min_board_cells)
    }

    /// Set up a fresh session from the current canvas size.
    /// Does nothing if the session is already initialized.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.initialized {
            return;
        }
        self.board = self.board_from_canvas();
        self.snake = Snake::starting(self.board);
        self.place_food(rng);

        self.direction = Direction::Right;
        self.initialized = true;
        self.game_over = false;
        self.score = 0;
        self.speed_ms = self.ramp.initial_ms;

        info!(
            width = self.board.width,
            height = self.board.height,
            "session initialized"
        );
    }

    /// Clear the initialized flag so the next `initialize` starts over
    pub fn reset(&mut self) {
        self.initialized = false;
    }

    /// Change heading unless it would reverse straight into the body.
    /// Checked against the current direction only, so two inputs
    /// between ticks can still turn the snake around.
    pub fn steer(mut self, direction: Direction) -> Self {
        if !direction.is_opposite(self.direction) {
            trace!(?direction, "direction changed");
            self.direction = direction;
        }
        self
    }

    /// Drop food on a uniformly random free cell.
    /// Leaves the board without food when the snake covers every cell.
    pub fn place_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.board.is_degenerate() {
            self.board = self.board_from_canvas();
        }

        if self.snake.len() >= self.board.cell_count() {
            debug!("no free cell left for food");
            self.food = None;
            return;
        }

        let food = loop {
            let candidate = Point::new(
                rng.random_range(0..self.board.width),
                rng.random_range(0..self.board.height),
            );
            if !self.snake.contains(candidate) {
                break candidate;
            }
        };

        debug!(x = food.x, y = food.y, "food placed");
        self.food = Some(food);
    }

    /// Advance the simulation by one step
    pub fn advance<R: Rng + ?Sized>(mut self, rng: &mut R) -> (Self, Flow) {
        if self.game_over {
            return (self, Flow::GameOver);
        }
        let Some(new_head) = self.snake.next_head(self.direction, self.board) else {
            return (self, Flow::Running);
        };

        if self.snake.contains(new_head) {
            self.game_over = true;
            info!(score = self.score, length = self.snake.len(), "game over");
            return (self, Flow::GameOver);
        }

        self.snake.push_head(new_head);

        match self.food {
            Some(food) if food == new_head => {
                self.score += 1;
                self.place_food(rng);
                let speed = self.ramp.after_score(self.speed_ms, self.score);
                if speed != self.speed_ms {
                    debug!(from = self.speed_ms, to = speed, score = self.score, "speed up");
                    self.speed_ms = speed;
                }
            }
            _ => {
                self.snake.pop_tail();
            }
        }

        (self, Flow::Running)
    }

    /// Status line, e.g. `Snake Game - Speed: 150ms, Score: 0`
    pub fn status_title(&self) -> String {
        format!(
            "{} - Speed: {}ms, Score: {}",
            GameConfig::TITLE,
            self.speed_ms,
            self.score
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
