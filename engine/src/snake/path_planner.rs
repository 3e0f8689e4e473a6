use std::collections::{HashMap, HashSet, VecDeque};

use crate::log_debug;
use super::grid::Grid;
use super::body::Snake;
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Food,
    Tail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub target: RouteTarget,
    /// Start cell first, goal cell last.
    pub cells: Vec<Cell>,
}

impl Route {
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Stateless breadth-first planner for the autonomous snake.
pub struct PathPlanner;

impl PathPlanner {
    /// Shortest route from `start` to `goal` that never expands into `blocked`.
    /// `start` itself may be blocked (it usually is the head).
    pub fn shortest_path(
        grid: &Grid,
        start: Cell,
        goal: Cell,
        blocked: &HashSet<Cell>,
    ) -> Option<Vec<Cell>> {
        if start == goal {
            return Some(vec![start]);
        }

        let mut parents: HashMap<Cell, Cell> = HashMap::new();
        let mut visited: HashSet<Cell> = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for next in grid.neighbors(current, blocked) {
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == goal {
                    return Some(Self::unwind(&parents, start, goal));
                }
                queue.push_back(next);
            }
        }

        None
    }

    fn unwind(parents: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            match parents.get(&current) {
                Some(&parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Heads for the food, or for the snake's own tail when the food is cut
    /// off. `None` means the snake is boxed in.
    pub fn plan_route(grid: &Grid, snake: &Snake, food: Cell) -> Option<Route> {
        let blocked = snake.blocked_cells();
        let head = snake.head();

        if let Some(cells) = Self::shortest_path(grid, head, food, &blocked) {
            return Some(Route { target: RouteTarget::Food, cells });
        }

        log_debug!("Food at ({}, {}) unreachable, following tail", food.x, food.y);
        Self::shortest_path(grid, head, snake.tail(), &blocked)
            .map(|cells| Route { target: RouteTarget::Tail, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::body::Segment;
    use crate::snake::types::Direction;

    /// Distances by repeated relaxation, independent of the queue-based search.
    fn brute_force_distance(grid: &Grid, start: Cell, goal: Cell, blocked: &HashSet<Cell>) -> Option<usize> {
        let mut dist: HashMap<Cell, usize> = HashMap::from([(start, 0)]);
        loop {
            let mut changed = false;
            for cell in grid.cells() {
                let Some(&d) = dist.get(&cell) else { continue };
                for next in grid.neighbors(cell, blocked) {
                    let better = dist.get(&next).is_none_or(|&old| d + 1 < old);
                    if better {
                        dist.insert(next, d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist.get(&goal).copied()
    }

    fn assert_valid_path(grid: &Grid, path: &[Cell], blocked: &HashSet<Cell>) {
        for pair in path.windows(2) {
            assert!(grid.direction_between(pair[0], pair[1]).is_some());
            assert!(!blocked.contains(&pair[1]));
        }
    }

    #[test]
    fn test_path_matches_brute_force_distance() {
        let grid = Grid::new(6).unwrap();
        let blocked: HashSet<Cell> = [
            Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3),
            Cell::new(3, 2), Cell::new(3, 3), Cell::new(3, 4), Cell::new(3, 5),
            Cell::new(4, 1), Cell::new(5, 1),
        ]
        .into_iter()
        .collect();
        let start = Cell::new(0, 0);

        for goal in grid.cells().filter(|c| !blocked.contains(c)) {
            let expected = brute_force_distance(&grid, start, goal, &blocked);
            let path = PathPlanner::shortest_path(&grid, start, goal, &blocked);
            match (expected, path) {
                (Some(d), Some(path)) => {
                    assert_eq!(path.len() - 1, d, "goal {:?}", goal);
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&goal));
                    assert_valid_path(&grid, &path, &blocked);
                }
                (None, None) => {}
                (expected, path) => panic!("goal {:?}: expected {:?}, got {:?}", goal, expected, path),
            }
        }
    }

    #[test]
    fn test_path_uses_wrap_around() {
        let grid = Grid::new(10).unwrap();
        let path = PathPlanner::shortest_path(&grid, Cell::new(0, 5), Cell::new(9, 5), &HashSet::new()).unwrap();
        assert_eq!(path, vec![Cell::new(0, 5), Cell::new(9, 5)]);
    }

    #[test]
    fn test_tie_break_prefers_down_then_right() {
        let grid = Grid::new(8).unwrap();
        let path = PathPlanner::shortest_path(&grid, Cell::new(2, 2), Cell::new(4, 4), &HashSet::new()).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4), Cell::new(3, 4), Cell::new(4, 4)]
        );
    }

    #[test]
    fn test_enclosed_goal_is_unreachable() {
        let grid = Grid::new(5).unwrap();
        let goal = Cell::new(2, 2);
        let blocked: HashSet<Cell> = grid.neighbors(goal, &HashSet::new()).into_iter().collect();
        assert!(PathPlanner::shortest_path(&grid, Cell::new(0, 0), goal, &blocked).is_none());
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = Grid::new(5).unwrap();
        let path = PathPlanner::shortest_path(&grid, Cell::new(1, 1), Cell::new(1, 1), &HashSet::new());
        assert_eq!(path, Some(vec![Cell::new(1, 1)]));
    }

    #[test]
    fn test_plan_route_targets_food() {
        let grid = Grid::new(8).unwrap();
        let snake = Snake::new(Cell::new(2, 2), Direction::Down);
        let route = PathPlanner::plan_route(&grid, &snake, Cell::new(2, 5)).unwrap();
        assert_eq!(route.target, RouteTarget::Food);
        assert_eq!(route.steps(), 3);
    }

    #[test]
    fn test_plan_route_falls_back_to_tail() {
        let grid = Grid::new(5).unwrap();
        // body walls off column 2 except the tail, food sits inside the
        // enclosure at (2,2) surrounded by body cells
        let segments = vec![
            Segment { cell: Cell::new(0, 0), direction: Direction::Right },
            Segment { cell: Cell::new(2, 1), direction: Direction::Down },
            Segment { cell: Cell::new(3, 2), direction: Direction::Left },
            Segment { cell: Cell::new(2, 3), direction: Direction::Up },
            Segment { cell: Cell::new(1, 2), direction: Direction::Right },
            Segment { cell: Cell::new(4, 4), direction: Direction::Right },
        ];
        let snake = Snake::from_segments(segments).unwrap();
        let route = PathPlanner::plan_route(&grid, &snake, Cell::new(2, 2)).unwrap();
        assert_eq!(route.target, RouteTarget::Tail);
        assert_eq!(route.cells.last(), Some(&Cell::new(4, 4)));
        assert_eq!(route.steps(), 2);
    }

    #[test]
    fn test_plan_route_boxed_in() {
        let grid = Grid::new(5).unwrap();
        let head = Cell::new(2, 2);
        let mut segments = vec![Segment { cell: head, direction: Direction::Up }];
        for cell in grid.neighbors(head, &HashSet::new()) {
            segments.push(Segment { cell, direction: Direction::Up });
        }
        segments.push(Segment { cell: Cell::new(0, 0), direction: Direction::Up });
        let snake = Snake::from_segments(segments).unwrap();
        assert!(PathPlanner::plan_route(&grid, &snake, Cell::new(4, 4)).is_none());
    }
}
