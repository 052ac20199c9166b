mod board_view;
mod config;
mod script;

use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::Validate;
use grid_snake::{
    log, logger, ControlOutcome, Direction, GameController, GridSnakeEngine, MoveOutcome, SessionRng,
};

use board_view::{describe_status, render_board};
use config::{get_config_manager, CONFIG_FILE};
use script::parse_moves;

#[derive(Parser)]
#[command(name = "grid_snake_cli", about = "Runs a grid snake game without a UI")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    columns: Option<usize>,
    /// Scripted moves, e.g. "RRDDL" or "right,down"
    #[arg(long)]
    moves: Option<String>,
    /// Random moves played after the scripted ones
    #[arg(long, default_value_t = 0)]
    random_moves: usize,
    /// Print the board after every accepted move
    #[arg(long)]
    show_steps: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("GridSnake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(rows) = args.rows {
        config.engine.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.engine.columns = columns;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let engine = GridSnakeEngine::new(config.engine.clone(), rng)?;
    log!("Session seed: {}", engine.seed());

    let mut moves = match args.moves.as_deref() {
        Some(script) => parse_moves(script)?,
        None => Vec::new(),
    };
    let mut move_rng = SessionRng::new(engine.seed().wrapping_add(1));
    moves.extend((0..args.random_moves).map(|_| Direction::ALL[move_rng.random_range(0..4usize)]));

    let mut controller = GameController::new(engine, &config.input);
    // Scripted input arrives exactly one throttle interval apart.
    let step = Duration::from_millis(config.input.throttle_ms);
    let mut now = Instant::now();

    for (index, direction) in moves.into_iter().enumerate() {
        let outcome = controller.on_direction_requested(direction, now);
        now += step;

        match outcome {
            ControlOutcome::Applied(MoveOutcome::Ignored) => {
                log!("Move {} ({}) ignored, game has ended", index + 1, direction);
                break;
            }
            ControlOutcome::Applied(result) => {
                if args.show_steps {
                    println!("move {}: {} -> {:?}", index + 1, direction, result);
                    println!("{}\n", render_board(controller.engine()));
                }
            }
            ControlOutcome::Paused | ControlOutcome::Throttled => {
                log!("Move {} ({}) dropped: {:?}", index + 1, direction, outcome);
            }
        }
    }

    println!("{}", render_board(controller.engine()));
    println!("{}", describe_status(controller.engine()));

    Ok(())
}
