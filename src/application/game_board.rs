use std::mem;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{Effect, GameState, Key, Message, Scheduler};
use crate::config::GameConfig;
use crate::domain::CanvasSize;

/// GameBoard ties one game session to its loop timer.
///
/// All host events arrive through `dispatch` one at a time; the frame
/// loop feeds elapsed time through `update`, which turns due timers
/// into `Message::Tick`.
pub struct GameBoard {
    state: GameState,
    scheduler: Scheduler,
    rng: StdRng,
    /// Cleared once the board is disposed; ticks stop silently after that
    alive: bool,
    /// The loop is started once, after the first paint sized the board
    loop_started: bool,
}

impl GameBoard {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic board for tests and replays
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            state: GameState::new(config),
            scheduler: Scheduler::new(),
            rng,
            alive: true,
            loop_started: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Paused means no loop handle is held
    pub fn is_paused(&self) -> bool {
        !self.scheduler.is_held()
    }

    #[cfg(test)]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn speed(&self) -> Duration {
        Duration::from_millis(u64::from(self.state.speed_ms))
    }

    /// Handle a single host event
    pub fn dispatch(&mut self, message: Message) -> Effect {
        match message {
            Message::PaintRequest(canvas) => self.on_paint(canvas),
            Message::KeyPress(key) => self.on_key(key),
            Message::Tick => self.on_tick(),
        }
    }

    /// Let `dt` of wall time pass; fires a tick when one is due
    pub fn update(&mut self, dt: Duration) -> Effect {
        if self.scheduler.poll(dt) {
            self.dispatch(Message::Tick)
        } else {
            Effect::Idle
        }
    }

    /// Mark the board as gone. Any tick after this stops the loop.
    pub fn dispose(&mut self) {
        self.alive = false;
    }

    fn on_paint(&mut self, canvas: CanvasSize) -> Effect {
        self.state.set_canvas(canvas);
        self.state.initialize(&mut self.rng);
        if !self.loop_started {
            self.loop_started = true;
            self.scheduler.start(self.speed());
        }
        Effect::Redraw
    }

    fn on_key(&mut self, key: Key) -> Effect {
        match key {
            Key::Arrow(direction) => {
                self.state = mem::take(&mut self.state).steer(direction);
                Effect::Idle
            }
            Key::Escape => {
                let was_over = self.state.game_over;
                self.state.reset();
                self.state.initialize(&mut self.rng);
                if was_over {
                    self.scheduler.start(self.speed());
                }
                info!(was_over, "game restarted");
                Effect::Idle
            }
            Key::Char('q' | 'Q') => {
                info!(score = self.state.score, "quit requested");
                self.scheduler.cancel();
                self.dispose();
                Effect::Quit
            }
            Key::Char('p' | 'P') => {
                if self.scheduler.is_held() {
                    self.scheduler.cancel();
                    info!("paused");
                } else {
                    self.scheduler.start(self.speed());
                    info!("resumed");
                }
                Effect::Idle
            }
            Key::Char(_) => Effect::Idle,
        }
    }

    fn on_tick(&mut self) -> Effect {
        if !self.alive || self.state.game_over {
            debug!(alive = self.alive, "game loop stopped");
            return Effect::Idle;
        }
        let (state, flow) = mem::take(&mut self.state).advance(&mut self.rng);
        self.state = state;
        if flow.is_running() {
            // The new speed only applies from the next delay on
            self.scheduler.reschedule(self.speed());
        } else {
            // Spent handle stays held, so P still has something to drop
            debug!("game loop stopped at game over");
        }
        Effect::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Point, Snake};

    const CANVAS: CanvasSize = CanvasSize::new(200.0, 200.0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn painted_board() -> GameBoard {
        let mut board = GameBoard::with_seed(GameConfig::default(), 42);
        assert_eq!(board.dispatch(Message::PaintRequest(CANVAS)), Effect::Redraw);
        board
    }

    fn press(board: &mut GameBoard, key: Key) -> Effect {
        board.dispatch(Message::KeyPress(key))
    }

    /// Put the head one step right of a body cell so the next tick collides
    fn force_game_over(board: &mut GameBoard) {
        board.state.snake = Snake::from_cells([
            Point::new(2, 1),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(3, 2),
        ]);
        board.state.direction = Direction::Down;
        board.dispatch(Message::Tick);
        assert!(board.state().game_over);
    }

    #[test]
    fn test_first_paint_initializes_and_starts_loop() {
        let board = painted_board();
        assert!(board.state().initialized);
        assert!(!board.is_paused());
        assert_eq!(board.state().snake.head(), Some(Point::new(5, 5)));
    }

    #[test]
    fn test_nothing_ticks_before_first_paint() {
        let mut board = GameBoard::with_seed(GameConfig::default(), 1);
        assert_eq!(board.update(ms(1000)), Effect::Idle);
        assert!(!board.state().initialized);
    }

    #[test]
    fn test_update_ticks_at_speed() {
        let mut board = painted_board();
        board.state.food = Some(Point::new(0, 0));
        assert_eq!(board.update(ms(149)), Effect::Idle);
        assert_eq!(board.update(ms(1)), Effect::Redraw);
        assert_eq!(board.state().snake.head(), Some(Point::new(6, 5)));

        assert_eq!(board.update(ms(150)), Effect::Redraw);
        assert_eq!(board.state().snake.head(), Some(Point::new(7, 5)));
    }

    #[test]
    fn test_arrow_key_steers() {
        let mut board = painted_board();
        assert_eq!(press(&mut board, Key::Arrow(Direction::Up)), Effect::Idle);
        assert_eq!(board.state().direction, Direction::Up);
        press(&mut board, Key::Arrow(Direction::Down));
        assert_eq!(board.state().direction, Direction::Up);
    }

    #[test]
    fn test_pause_twice_keeps_state() {
        let mut board = painted_board();
        let snake = board.state().snake.clone();
        let food = board.state().food;
        let score = board.state().score;

        press(&mut board, Key::Char('p'));
        assert!(board.is_paused());
        press(&mut board, Key::Char('P'));
        assert!(!board.is_paused());

        assert_eq!(board.state().snake, snake);
        assert_eq!(board.state().food, food);
        assert_eq!(board.state().score, score);
    }

    #[test]
    fn test_paused_board_does_not_tick() {
        let mut board = painted_board();
        let snake = board.state().snake.clone();
        press(&mut board, Key::Char('p'));
        assert_eq!(board.update(ms(10_000)), Effect::Idle);
        assert_eq!(board.state().snake, snake);
    }

    #[test]
    fn test_quit_disposes() {
        let mut board = painted_board();
        assert_eq!(press(&mut board, Key::Char('Q')), Effect::Quit);
        assert!(!board.is_alive());
        assert_eq!(board.dispatch(Message::Tick), Effect::Idle);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut board = painted_board();
        let direction = board.state().direction;
        assert_eq!(press(&mut board, Key::Char('x')), Effect::Idle);
        assert_eq!(board.state().direction, direction);
        assert!(!board.is_paused());
    }

    #[test]
    fn test_tick_after_dispose_stops_loop() {
        let mut board = painted_board();
        let snake = board.state().snake.clone();
        board.dispose();
        assert_eq!(board.update(ms(150)), Effect::Idle);
        assert_eq!(board.update(ms(150)), Effect::Idle);
        assert_eq!(board.state().snake, snake);
    }

    #[test]
    fn test_game_over_stops_loop() {
        let mut board = painted_board();
        force_game_over(&mut board);
        let snake = board.state().snake.clone();
        assert_eq!(board.update(ms(1000)), Effect::Idle);
        assert_eq!(board.update(ms(1000)), Effect::Idle);
        assert_eq!(board.state().snake, snake);
    }

    #[test]
    fn test_game_over_tick_does_not_rearm() {
        let mut board = painted_board();
        force_game_over(&mut board);
        assert!(!board.scheduler.is_armed());
        assert!(board.scheduler.is_held());
        assert!(!board.is_paused());
    }

    #[test]
    fn test_pause_after_game_over_drops_spent_handle() {
        let mut board = painted_board();
        force_game_over(&mut board);
        press(&mut board, Key::Char('p'));
        assert!(board.is_paused());
        press(&mut board, Key::Char('p'));
        assert!(!board.is_paused());
        assert_eq!(board.update(ms(150)), Effect::Idle);
        assert!(!board.scheduler.is_armed());
    }

    #[test]
    fn test_escape_after_game_over_restarts_loop() {
        let mut board = painted_board();
        force_game_over(&mut board);
        board.state.score = 12;

        press(&mut board, Key::Escape);

        let state = board.state();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, 150);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.head(), Some(Point::new(5, 5)));

        board.state.food = Some(Point::new(0, 0));
        assert_eq!(board.update(ms(150)), Effect::Redraw);
        assert_eq!(board.state().snake.head(), Some(Point::new(6, 5)));
    }

    #[test]
    fn test_escape_while_paused_stays_paused() {
        let mut board = painted_board();
        press(&mut board, Key::Char('p'));
        press(&mut board, Key::Escape);
        assert!(board.is_paused());
        assert_eq!(board.update(ms(1000)), Effect::Idle);
    }

    #[test]
    fn test_speed_change_applies_to_next_delay() {
        let mut board = painted_board();
        board.state.score = 9;
        board.state.food = Some(Point::new(6, 5));

        assert_eq!(board.update(ms(150)), Effect::Redraw);
        assert_eq!(board.state().speed_ms, 148);

        board.state.food = Some(Point::new(0, 0));
        assert_eq!(board.update(ms(147)), Effect::Idle);
        assert_eq!(board.update(ms(1)), Effect::Redraw);
    }
}
