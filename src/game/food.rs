use super::grid::{Cell, Grid};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// How many random draws to make before falling back to choosing among the
/// free cells directly
const MAX_DRAWS: usize = 64;

/// Every cell on the board is occupied, so there is nowhere to put food.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the board for food")]
pub(crate) struct GridExhausted;

/// Pick a random cell on `grid` that is not in `occupied`.
///
/// Cells are drawn uniformly from the whole board and occupied draws are
/// rejected.  If the board is crowded enough that `MAX_DRAWS` draws all land
/// on the snake, the cell is instead chosen uniformly from an enumeration of
/// the free cells, so this always terminates.
pub(crate) fn respawn<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    grid: Grid,
) -> Result<Cell, GridExhausted> {
    let taken = occupied.iter().filter(|&&c| grid.contains(c)).count();
    if taken >= grid.cell_count() {
        return Err(GridExhausted);
    }
    for _ in 0..MAX_DRAWS {
        let cell = Cell::new(
            rng.random_range(0..i32::from(grid.width())),
            rng.random_range(0..i32::from(grid.height())),
        );
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
        .ok_or(GridExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_spawns_on_occupied_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(10, 8, 6);
        let occupied = grid
            .cells()
            .filter(|c| (c.x + c.y) % 3 != 0)
            .collect::<HashSet<_>>();
        for _ in 0..1000 {
            let cell = respawn(&mut rng, &occupied, grid).unwrap();
            assert!(grid.contains(cell));
            assert!(!occupied.contains(&cell), "spawned on {cell:?}");
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(1, 20, 20);
        let free = Cell::new(13, 17);
        let occupied = grid.cells().filter(|&c| c != free).collect::<HashSet<_>>();
        for _ in 0..10 {
            assert_eq!(respawn(&mut rng, &occupied, grid), Ok(free));
        }
    }

    #[test]
    fn full_grid_is_exhausted() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(1, 3, 2);
        let occupied = grid.cells().collect::<HashSet<_>>();
        assert_eq!(respawn(&mut rng, &occupied, grid), Err(GridExhausted));
    }

    #[test]
    fn off_board_cells_do_not_count_as_taken() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(1, 2, 1);
        let occupied = HashSet::from([Cell::new(0, 0), Cell::new(-1, 0), Cell::new(2, 0)]);
        assert_eq!(respawn(&mut rng, &occupied, grid), Ok(Cell::new(1, 0)));
    }

    #[test]
    fn empty_board_covers_every_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(1, 3, 3);
        let occupied = HashSet::new();
        let seen = (0..500)
            .map(|_| respawn(&mut rng, &occupied, grid).unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), grid.cell_count());
    }
}
