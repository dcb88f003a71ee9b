use super::Direction;

/// Point is a single cell on the board, in board units (not pixels).
/// Values are immutable; every move produces a new point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step in the given direction (unwrapped)
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Wrap each axis independently onto a `width`×`height` torus.
    /// Only handles one cell of overshoot, which is all a single step can produce.
    pub const fn wrap(self, width: i32, height: i32) -> Self {
        let x = if self.x < 0 {
            width - 1
        } else if self.x >= width {
            0
        } else {
            self.x
        };
        let y = if self.y < 0 {
            height - 1
        } else if self.y >= height {
            0
        } else {
            self.y
        };
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
