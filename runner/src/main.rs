mod config;
mod input_script;
mod render;
mod round_runner;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use snake_engine::config::Validate;
use snake_engine::logger::{self, LogLevel};
use snake_engine::snake::{ControlMode, GameState, RandomFoodPlacer, DEFAULT_DIRECTION};
use snake_engine::{log, SessionRng};

use config::{default_config_path, get_config_manager, RunnerConfig};
use input_script::parse_moves;
use round_runner::{run_round, RoundOptions};

#[derive(Parser)]
#[command(name = "snake_runner")]
#[command(version, about = "Headless snake simulation with manual or pathfinding control")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Board side length; also recentres the start cell
    #[arg(long)]
    grid_size: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long)]
    rounds: Option<u32>,

    #[arg(long)]
    tick_interval_ms: Option<u32>,

    /// Manual input script, one tick per character: U, D, L, R or '.'
    #[arg(long, default_value = "")]
    moves: String,

    /// Print an ASCII frame after every tick
    #[arg(long)]
    render: bool,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Manual,
    Autonomous,
}

impl From<ModeArg> for ControlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Manual => ControlMode::Manual,
            ModeArg::Autonomous => ControlMode::Autonomous,
        }
    }
}

fn apply_overrides(mut config: RunnerConfig, args: &Args) -> RunnerConfig {
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(grid_size) = args.grid_size {
        config.grid_size = grid_size;
        config.start_x = grid_size / 2;
        config.start_y = grid_size / 2;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.max_ticks.is_some() {
        config.max_ticks = args.max_ticks;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.tick_interval_ms = tick_interval_ms;
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    let config = apply_overrides(config_manager.get_config()?, &args);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path);
    }

    let moves = parse_moves(&args.moves)?;
    if config.mode == ControlMode::Autonomous && !moves.is_empty() {
        log!("Ignoring --moves in autonomous mode");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let placer = RandomFoodPlacer::new(rng);
    log!(
        "Starting {:?} run on a {}x{} grid, seed {}",
        config.mode,
        config.grid_size,
        config.grid_size,
        placer.seed()
    );

    let mut state = GameState::new(
        config.grid()?,
        config.start(),
        DEFAULT_DIRECTION,
        Box::new(placer),
    )?;

    let options = RoundOptions {
        mode: config.mode,
        moves: &moves,
        max_ticks: config.max_ticks,
        tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
        render: args.render,
    };

    let mut best = 0;
    for round in 1..=config.rounds {
        if round > 1 {
            state.reset(config.start())?;
        }
        let summary = run_round(&mut state, &options);
        best = best.max(summary.score);
        match summary.reason {
            Some(reason) => log!(
                "Round {}/{}: game over ({:?}) after {} tick(s). Score: {}",
                round,
                config.rounds,
                reason,
                summary.ticks,
                summary.score
            ),
            None => log!(
                "Round {}/{}: stopped after {} tick(s). Score: {}",
                round,
                config.rounds,
                summary.ticks,
                summary.score
            ),
        }
    }

    log!("Best score: {}", best);
    Ok(())
}
