use super::grid::Grid;
use super::snake::Snake;
use std::fmt;

/// The ways a snake can die
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the board
    OutOfBounds,
    /// The head ran into another cell of the body
    SelfCollision,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::OutOfBounds => write!(f, "hit the wall"),
            Collision::SelfCollision => write!(f, "bit its own tail"),
        }
    }
}

/// Check the snake's current head against the walls of `grid` and against
/// the rest of its body.  An empty snake never collides.
pub(crate) fn detect(snake: &Snake, grid: Grid) -> Option<Collision> {
    let head = snake.head()?;
    if !grid.contains(head) {
        Some(Collision::OutOfBounds)
    } else if snake.cells().skip(1).any(|c| c == head) {
        Some(Collision::SelfCollision)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Cell;
    use rstest::rstest;

    const GRID: Grid = Grid::new(1, 10, 10);

    #[rstest]
    #[case(Cell::new(-1, 5))]
    #[case(Cell::new(10, 5))]
    #[case(Cell::new(5, -1))]
    #[case(Cell::new(5, 10))]
    fn wall(#[case] head: Cell) {
        assert_eq!(detect(&Snake::new(head), GRID), Some(Collision::OutOfBounds));
    }

    #[test]
    fn head_on_body() {
        let snake = Snake::from_cells([
            Cell::new(4, 5),
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(4, 6),
            Cell::new(4, 5),
            Cell::new(4, 4),
        ]);
        assert_eq!(detect(&snake, GRID), Some(Collision::SelfCollision));
    }

    #[test]
    fn wall_takes_precedence() {
        let snake = Snake::from_cells([Cell::new(-1, 0), Cell::new(-1, 0)]);
        assert_eq!(detect(&snake, GRID), Some(Collision::OutOfBounds));
    }

    #[test]
    fn no_collision() {
        let snake = Snake::from_cells([
            Cell::new(5, 4),
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
        ]);
        assert_eq!(detect(&snake, GRID), None);
        assert_eq!(detect(&Snake::new(Cell::new(0, 0)), GRID), None);
        assert_eq!(detect(&Snake::default(), GRID), None);
    }
}
