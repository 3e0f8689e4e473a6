use std::collections::HashSet;

use crate::SessionRng;
use super::grid::Grid;
use super::types::Cell;

/// Chooses where the next food goes. `None` means every cell is taken.
pub trait FoodPlacer {
    fn place(&mut self, grid: &Grid, occupied: &HashSet<Cell>) -> Option<Cell>;
}

impl<F> FoodPlacer for F
where
    F: FnMut(&Grid, &HashSet<Cell>) -> Option<Cell>,
{
    fn place(&mut self, grid: &Grid, occupied: &HashSet<Cell>) -> Option<Cell> {
        self(grid, occupied)
    }
}

/// Uniform choice among free cells.
pub struct RandomFoodPlacer {
    rng: SessionRng,
}

impl RandomFoodPlacer {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl FoodPlacer for RandomFoodPlacer {
    fn place(&mut self, grid: &Grid, occupied: &HashSet<Cell>) -> Option<Cell> {
        // rejection sampling while the board is sparse, exhaustive pick once it fills up
        if occupied.len() * 2 < grid.cell_count() {
            for _ in 0..100 {
                let cell = Cell::new(
                    self.rng.random_range(0..grid.size()),
                    self.rng.random_range(0..grid.size()),
                );
                if !occupied.contains(&cell) {
                    return Some(cell);
                }
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
        self.rng.choose(&free).copied()
    }
}
