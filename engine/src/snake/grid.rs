use std::collections::HashSet;

use super::types::{Cell, Direction};

pub const MIN_GRID_SIZE: usize = 2;

/// Square toroidal board: leaving one edge re-enters from the opposite one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, String> {
        if size < MIN_GRID_SIZE {
            return Err(format!(
                "Grid size must be at least {}, got {}",
                MIN_GRID_SIZE, size
            ));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    pub fn wrap(&self, x: i64, y: i64) -> Cell {
        let n = self.size as i64;
        Cell::new(x.rem_euclid(n) as usize, y.rem_euclid(n) as usize)
    }

    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.x as i64 + dx, cell.y as i64 + dy)
    }

    /// Wrapped neighbours in [`Direction::SEARCH_ORDER`], skipping `excluded`.
    pub fn neighbors(&self, cell: Cell, excluded: &HashSet<Cell>) -> Vec<Cell> {
        Direction::SEARCH_ORDER
            .iter()
            .map(|&dir| self.step(cell, dir))
            .filter(|next| !excluded.contains(next))
            .collect()
    }

    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::SEARCH_ORDER
            .into_iter()
            .find(|&dir| self.step(from, dir) == to)
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell::new(x, y)))
    }
}
