use super::grid::Cell;
use std::collections::VecDeque;

/// The cells making up the snake.
///
/// The body is stored head first: the front of the deque is the head and the
/// back is the tail.  All cells are board coordinates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a one-cell snake whose head is at `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            body: VecDeque::from([head]),
        }
    }

    /// Create a snake from its cells, head first
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Snake {
        Snake {
            body: cells.into_iter().collect(),
        }
    }

    /// Return the occupied cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Return the position of the snake's head, or `None` if the snake has
    /// been cleared
    pub(crate) fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub(crate) fn tail(&self) -> Option<Cell> {
        self.body.back().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move the snake so that its head is at `new_head`.
    ///
    /// Without `grow`, the tail cell is removed and returned, so the body
    /// shifts by one cell.  With `grow`, the tail stays where it is, the
    /// snake gets one cell longer, and `None` is returned.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) -> Option<Cell> {
        let tail = if grow { None } else { self.body.pop_back() };
        self.body.push_front(new_head);
        tail
    }

    /// Remove every cell
    pub(crate) fn clear(&mut self) {
        self.body.clear();
    }
}
