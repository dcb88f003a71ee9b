use std::collections::VecDeque;
use super::{Board, Direction, Point};

/// Snake body, head first.
/// Cells are pairwise distinct while the game is running.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Self {
        Self { body: cells.into_iter().collect() }
    }

    /// Three horizontally adjacent cells with the head at the board centre, facing right
    pub fn starting(board: Board) -> Self {
        let head = board.center();
        Self::from_cells([
            head,
            Point::new(head.x - 1, head.y),
            Point::new(head.x - 2, head.y),
        ])
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Linear scan, the body is short
    pub fn contains(&self, p: Point) -> bool {
        self.body.iter().any(|&segment| segment == p)
    }

    /// Where the head would land after one step, wrapped onto the board
    pub fn next_head(&self, direction: Direction, board: Board) -> Option<Point> {
        self.head()
            .map(|head| head.step(direction).wrap(board.width, board.height))
    }

    pub fn push_head(&mut self, p: Point) {
        self.body.push_front(p);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        self.body.pop_back()
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_snake_on_10x10() {
        let snake = Snake::starting(Board::new(10, 10));
        let cells: Vec<_> = snake.cells().collect();
        assert_eq!(cells, vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]);
    }

    #[test]
    fn test_next_head_wraps() {
        let snake = Snake::from_cells([Point::new(9, 2), Point::new(8, 2)]);
        assert_eq!(
            snake.next_head(Direction::Right, Board::new(10, 10)),
            Some(Point::new(0, 2))
        );
    }

    #[test]
    fn test_empty_snake_has_no_next_head() {
        assert_eq!(Snake::default().next_head(Direction::Up, Board::new(10, 10)), None);
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::from_cells([Point::new(1, 1)]);
        snake.push_head(Point::new(2, 1));
        assert_eq!(snake.head(), Some(Point::new(2, 1)));
        assert_eq!(snake.pop_tail(), Some(Point::new(1, 1)));
        assert_eq!(snake.len(), 1);
    }
}
