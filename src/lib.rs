// Domain layer - cells, directions, snake body, speed ramp
pub mod domain;

// Application layer - session state, loop timer, event dispatch
pub mod application;

// Tunables
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Point, Direction, Board, CanvasSize, Snake};
pub use application::{GameBoard, GameState, Message, Key, Effect, Scheduler};
pub use config::GameConfig;
