//! Single-snake simulation on a toroidal grid: body movement, the
//! breadth-first autopilot and the per-tick game loop.

mod body;
mod food;
mod game_state;
mod grid;
mod path_planner;
mod types;

pub use body::{Segment, Snake, DEFAULT_DIRECTION};
pub use food::{FoodPlacer, RandomFoodPlacer};
pub use game_state::{GameState, Snapshot};
pub use grid::{Grid, MIN_GRID_SIZE};
pub use path_planner::{PathPlanner, Route, RouteTarget};
pub use types::{Cell, ControlMode, Direction, GameOverReason, MoveOutcome, TickResult};
