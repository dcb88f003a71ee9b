mod game_state;
mod scheduler;
mod message;
mod game_board;

pub use game_state::{GameState, Flow};
pub use scheduler::Scheduler;
pub use message::{Key, Message, Effect};
pub use game_board::GameBoard;
