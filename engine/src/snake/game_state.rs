use std::collections::HashSet;

use crate::{log, log_debug};
use super::food::FoodPlacer;
use super::grid::Grid;
use super::path_planner::{PathPlanner, RouteTarget};
use super::body::{Snake, DEFAULT_DIRECTION};
use super::types::{Cell, Direction, GameOverReason, MoveOutcome, TickResult};

/// Read-only view handed to whatever draws the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub segments: Vec<Cell>,
    pub food: Cell,
    pub score: usize,
    pub tick: u64,
    pub game_over: Option<GameOverReason>,
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Cell,
    food_placer: Box<dyn FoodPlacer>,
    tick: u64,
    game_over: Option<GameOverReason>,
}

impl GameState {
    pub fn new(
        grid: Grid,
        start: Cell,
        direction: Direction,
        mut food_placer: Box<dyn FoodPlacer>,
    ) -> Result<Self, String> {
        Self::check_start(&grid, start)?;
        let snake = Snake::new(start, direction);
        let food = Self::initial_food(&grid, &snake, food_placer.as_mut())?;

        Ok(Self {
            grid,
            snake,
            food,
            food_placer,
            tick: 0,
            game_over: None,
        })
    }

    /// Starts over with a fresh single-segment snake heading down.
    pub fn reset(&mut self, start: Cell) -> Result<(), String> {
        Self::check_start(&self.grid, start)?;
        self.snake.reset(start);
        self.food = Self::initial_food(&self.grid, &self.snake, self.food_placer.as_mut())?;
        self.tick = 0;
        self.game_over = None;
        log!("Round reset, start at ({}, {}) heading {:?}", start.x, start.y, DEFAULT_DIRECTION);
        Ok(())
    }

    fn check_start(grid: &Grid, start: Cell) -> Result<(), String> {
        if !grid.contains(start) {
            return Err(format!(
                "Start cell ({}, {}) is outside the {}x{} grid",
                start.x,
                start.y,
                grid.size(),
                grid.size()
            ));
        }
        Ok(())
    }

    fn initial_food(grid: &Grid, snake: &Snake, placer: &mut dyn FoodPlacer) -> Result<Cell, String> {
        let occupied = snake.occupied();
        match placer.place(grid, &occupied) {
            Some(cell) if grid.contains(cell) && !occupied.contains(&cell) => Ok(cell),
            Some(cell) => Err(format!("Food placer chose an invalid cell ({}, {})", cell.x, cell.y)),
            None => Err("Food placer found no free cell".to_string()),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.cells(),
            food: self.food,
            score: self.score(),
            tick: self.tick,
            game_over: self.game_over,
        }
    }

    /// One player-driven tick. At most one input is applied; a reversal is
    /// dropped and the snake keeps its heading.
    pub fn advance_manual(&mut self, input: Option<Direction>) -> TickResult {
        if let Some(reason) = self.game_over {
            return self.finished(reason);
        }

        if let Some(direction) = input
            && !self.snake.set_direction(direction)
        {
            log_debug!("Ignoring reversal {:?} while heading {:?}", direction, self.snake.heading());
        }

        let outcome = self.snake.advance(&self.grid);
        self.after_move(outcome)
    }

    /// One planner-driven tick.
    pub fn advance_autonomous(&mut self) -> TickResult {
        if let Some(reason) = self.game_over {
            return self.finished(reason);
        }

        if self.snake.pending_path.is_empty() && !self.replan() {
            log!("Snake is boxed in at tick {}", self.tick);
            return self.end(GameOverReason::Stuck);
        }

        let expected = self.snake.pending_path.pop_front();
        if let Some(next) = expected
            && let Some(direction) = self.grid.direction_between(self.snake.head(), next)
        {
            self.snake.set_direction(direction);
        }

        let outcome = self.snake.advance(&self.grid);
        if expected.is_some_and(|cell| cell != self.snake.head()) {
            log_debug!("Head left the planned path, dropping it");
            self.snake.clear_path();
        }

        self.after_move(outcome)
    }

    fn replan(&mut self) -> bool {
        let Some(route) = PathPlanner::plan_route(&self.grid, &self.snake, self.food) else {
            return false;
        };
        log_debug!(
            "Planned {} step(s) towards {}",
            route.steps(),
            match route.target {
                RouteTarget::Food => "food",
                RouteTarget::Tail => "tail",
            }
        );
        self.snake.pending_path = route.cells.into_iter().skip(1).collect();
        true
    }

    fn after_move(&mut self, outcome: MoveOutcome) -> TickResult {
        self.tick += 1;

        if outcome == MoveOutcome::SelfCollision {
            log!("Self collision at ({}, {})", self.snake.head().x, self.snake.head().y);
            return self.end(GameOverReason::SelfCollision);
        }

        if self.snake.head() == self.food {
            self.snake.grow(&self.grid);
            self.snake.clear_path();
            log!("Ate food at ({}, {}). Score: {}", self.food.x, self.food.y, self.score());

            let occupied: HashSet<Cell> = self.snake.occupied();
            match self.food_placer.place(&self.grid, &occupied) {
                Some(cell) if !occupied.contains(&cell) && self.grid.contains(cell) => {
                    self.food = cell;
                    log_debug!("Food spawned at ({}, {})", cell.x, cell.y);
                }
                _ => {
                    log!("No free cell left for food");
                    return self.end(GameOverReason::BoardFull);
                }
            }
        }

        TickResult::Alive
    }

    fn end(&mut self, reason: GameOverReason) -> TickResult {
        self.game_over = Some(reason);
        log!("Game over ({:?}) after {} tick(s). Score: {}", reason, self.tick, self.score());
        self.finished(reason)
    }

    fn finished(&self, reason: GameOverReason) -> TickResult {
        TickResult::GameOver {
            score: self.score(),
            reason,
        }
    }
}
