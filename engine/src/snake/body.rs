use std::collections::{HashMap, HashSet, VecDeque};

use super::grid::Grid;
use super::types::{Cell, Direction, MoveOutcome};

pub const DEFAULT_DIRECTION: Direction = Direction::Down;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub direction: Direction,
}

/// Segment chain with head at index 0.
///
/// Turns are relayed through a ledger keyed by cell: when the head turns, the
/// new direction is stored at the cell it turned on, every following segment
/// picks it up when it reaches that cell, and the tail erases it on its way
/// through.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Segment>,
    turns: HashMap<Cell, Direction>,
    heading: Direction,
    pub(crate) pending_path: VecDeque<Cell>,
}

impl Snake {
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            segments: vec![Segment { cell: start, direction }],
            turns: HashMap::new(),
            heading: direction,
            pending_path: VecDeque::new(),
        }
    }

    /// Builds a body from explicit segments, head first. The heading is taken
    /// from the head segment.
    pub fn from_segments(segments: Vec<Segment>) -> Option<Self> {
        let heading = segments.first()?.direction;
        Some(Self {
            segments,
            turns: HashMap::new(),
            heading,
            pending_path: VecDeque::new(),
        })
    }

    pub fn reset(&mut self, start: Cell) {
        *self = Self::new(start, DEFAULT_DIRECTION);
    }

    pub fn head(&self) -> Cell {
        self.segments[0].cell
    }

    pub fn tail(&self) -> Cell {
        self.tail_segment().cell
    }

    fn tail_segment(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cells(&self) -> Vec<Cell> {
        self.segments.iter().map(|s| s.cell).collect()
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.segments.iter().map(|s| s.cell).collect()
    }

    /// Every body cell except the tail, which will have moved on by the time
    /// the head gets there.
    pub fn blocked_cells(&self) -> HashSet<Cell> {
        self.segments[..self.segments.len() - 1]
            .iter()
            .map(|s| s.cell)
            .collect()
    }

    pub fn turn_at(&self, cell: Cell) -> Option<Direction> {
        self.turns.get(&cell).copied()
    }

    pub fn pending_turns(&self) -> usize {
        self.turns.len()
    }

    /// Returns `false` and leaves everything untouched for a 180° reversal.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.heading) {
            return false;
        }
        if direction != self.heading {
            self.heading = direction;
            self.turns.insert(self.head(), direction);
        }
        true
    }

    pub fn advance(&mut self, grid: &Grid) -> MoveOutcome {
        let last = self.segments.len() - 1;
        for (i, segment) in self.segments.iter_mut().enumerate() {
            if let Some(&turn) = self.turns.get(&segment.cell) {
                segment.direction = turn;
                if i == last {
                    self.turns.remove(&segment.cell);
                }
            }
            segment.cell = grid.step(segment.cell, segment.direction);
        }

        if self.has_self_collision() {
            MoveOutcome::SelfCollision
        } else {
            MoveOutcome::Alive
        }
    }

    pub fn has_self_collision(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.segments.len());
        !self.segments.iter().all(|s| seen.insert(s.cell))
    }

    /// Appends a segment one cell behind the tail, moving the same way.
    pub fn grow(&mut self, grid: &Grid) {
        let tail = *self.tail_segment();
        let cell = grid.step(tail.cell, tail.direction.opposite());
        self.segments.push(Segment { cell, direction: tail.direction });
    }

    pub fn pending_path(&self) -> &VecDeque<Cell> {
        &self.pending_path
    }

    pub fn clear_path(&mut self) {
        self.pending_path.clear();
    }
}
