use super::direction::Direction;

/// A position on the board, in grid units.
///
/// Coordinates are signed so that a step off the left or top edge is still
/// representable and can be reported as a wall collision.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one unit away from this one in `direction`.  The
    /// result is not checked against any bounds.
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The top-left corner of a drawn cell, in pixels
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Pixel {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

/// Board geometry: the size of a cell in pixels and the size of the board in
/// cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    cell_size: u16,
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) const fn new(cell_size: u16, width: u16, height: u16) -> Grid {
        Grid {
            cell_size,
            width,
            height,
        }
    }

    /// Side length of a cell, in pixels
    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Width of the board, in cells
    pub(crate) fn width(self) -> u16 {
        self.width
    }

    /// Height of the board, in cells
    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Total number of cells on the board
    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Size of the whole board in pixels, as `(width, height)`
    pub(crate) fn pixel_size(self) -> (u32, u32) {
        let side = u32::from(self.cell_size);
        (u32::from(self.width) * side, u32::from(self.height) * side)
    }

    /// Is `cell` on the board?
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x) && (0..i32::from(self.height)).contains(&cell.y)
    }

    /// Return the pixel position of the top-left corner of `cell`
    pub(crate) fn cell_to_pixel(self, cell: Cell) -> Pixel {
        let side = i32::from(self.cell_size);
        Pixel {
            x: cell.x.saturating_mul(side),
            y: cell.y.saturating_mul(side),
        }
    }

    /// The cell at which a new snake is placed
    pub(crate) fn spawn_point(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Iterate over every cell on the board in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GRID: Grid = Grid::new(40, 30, 20);

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(29, 19), true)]
    #[case(Cell::new(12, 7), true)]
    #[case(Cell::new(-1, 5), false)]
    #[case(Cell::new(5, -1), false)]
    #[case(Cell::new(30, 5), false)]
    #[case(Cell::new(5, 20), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(GRID.contains(cell), inside);
    }

    #[rstest]
    #[case(Cell::new(0, 0), Pixel { x: 0, y: 0 })]
    #[case(Cell::new(1, 0), Pixel { x: 40, y: 0 })]
    #[case(Cell::new(29, 19), Pixel { x: 1160, y: 760 })]
    #[case(Cell::new(-1, 2), Pixel { x: -40, y: 80 })]
    fn test_cell_to_pixel(#[case] cell: Cell, #[case] pixel: Pixel) {
        assert_eq!(GRID.cell_to_pixel(cell), pixel);
    }

    #[rstest]
    #[case(Direction::Left, Cell::new(4, 5))]
    #[case(Direction::Right, Cell::new(6, 5))]
    #[case(Direction::Up, Cell::new(5, 4))]
    #[case(Direction::Down, Cell::new(5, 6))]
    fn test_step(#[case] direction: Direction, #[case] cell: Cell) {
        assert_eq!(Cell::new(5, 5).step(direction), cell);
    }

    #[test]
    fn cells_cover_board_in_row_major_order() {
        let grid = Grid::new(1, 3, 2);
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1),
            ]
        );
        assert_eq!(cells.len(), grid.cell_count());
        assert!(cells.into_iter().all(|c| grid.contains(c)));
    }

    #[test]
    fn spawn_point_is_centre() {
        assert_eq!(GRID.spawn_point(), Cell::new(15, 10));
        assert_eq!(Grid::new(1, 5, 1).spawn_point(), Cell::new(2, 0));
    }

    #[test]
    fn pixel_size() {
        assert_eq!(GRID.pixel_size(), (1200, 800));
    }
}
