use crate::domain::{CanvasSize, Direction};

/// Toolkit-independent key press
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Arrow(Direction),
    Escape,
    /// Any key that produced a character
    Char(char),
}

/// Everything the host can tell the board
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Message {
    /// The game-loop timer fired
    Tick,
    KeyPress(Key),
    /// The host is about to draw a canvas of this size
    PaintRequest(CanvasSize),
}

/// What the host should do after a message was handled
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    Idle,
    Redraw,
    /// Close the window and end the process
    Quit,
}
