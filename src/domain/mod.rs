mod point;
mod direction;
mod board;
mod snake;
mod speed;

pub use point::Point;
pub use direction::Direction;
pub use board::{Board, CanvasSize};
pub use snake::Snake;
pub use speed::SpeedRamp;
