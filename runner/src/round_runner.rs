use std::time::Duration;

use snake_engine::log;
use snake_engine::snake::{ControlMode, Direction, GameOverReason, GameState, TickResult};

use crate::render::render_frame;

pub struct RoundOptions<'a> {
    pub mode: ControlMode,
    pub moves: &'a [Option<Direction>],
    pub max_ticks: Option<u64>,
    pub tick_interval: Duration,
    pub render: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: usize,
    pub ticks: u64,
    /// `None` when the round hit the tick limit with the snake still alive.
    pub reason: Option<GameOverReason>,
}

/// Plays one round to completion, pacing ticks at the configured interval.
pub fn run_round(state: &mut GameState, options: &RoundOptions) -> RoundSummary {
    let mut script = options.moves.iter().copied();

    loop {
        if options.max_ticks.is_some_and(|limit| state.tick() >= limit) {
            log!("Tick limit reached with the snake alive");
            return RoundSummary {
                score: state.score(),
                ticks: state.tick(),
                reason: None,
            };
        }

        let result = match options.mode {
            ControlMode::Manual => state.advance_manual(script.next().flatten()),
            ControlMode::Autonomous => state.advance_autonomous(),
        };

        if options.render {
            println!("{}", render_frame(&state.snapshot(), state.grid().size()));
        }

        if let TickResult::GameOver { score, reason } = result {
            return RoundSummary {
                score,
                ticks: state.tick(),
                reason: Some(reason),
            };
        }

        if !options.tick_interval.is_zero() {
            std::thread::sleep(options.tick_interval);
        }
    }
}
