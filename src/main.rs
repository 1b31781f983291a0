use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rush_solver::heuristic::{ExitLane, Heuristic, NullHeuristic};
use rush_solver::solve::{self, Limits, Outcome, SearchOptions};
use rush_solver::{aggregate, render, Bounds, Config, Game};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicType {
    ExitLane,
    Null,
}

#[derive(Parser)]
#[command(name = "rush-solver")]
#[command(about = "Solve a sliding-vehicle escape puzzle", long_about = None)]
struct Args {
    /// Puzzle file, one `NAME LENGTH X,Y ORIENTATION` per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the moves (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    x_min: i32,
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    x_max: i32,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    y_min: i32,
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    y_max: i32,

    /// Name of the vehicle that has to escape
    #[arg(short, long, default_value = "S")]
    escape: String,

    #[arg(short = 'H', long, value_enum, default_value = "exit-lane")]
    heuristic: HeuristicType,

    /// Give up after expanding this many boards
    #[arg(short = 'n', long)]
    max_expansions: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Derive successor boards in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the starting board to stderr
    #[arg(short, long)]
    print_board: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        bounds: Bounds {
            x_min: args.x_min,
            x_max: args.x_max,
            y_min: args.y_min,
            y_max: args.y_max,
        },
        escape: args.escape.as_str().into(),
    };
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let game = Game::parse_with(&data, config).context("Failed to load the puzzle")?;
    if args.print_board {
        eprint!("{game}");
    }

    let opts = SearchOptions {
        limits: Limits {
            max_expansions: args.max_expansions,
            timeout: args.timeout_ms.map(Duration::from_millis),
        },
        parallel: args.parallel,
    };
    let outcome = match args.heuristic {
        HeuristicType::ExitLane => run(&game, &ExitLane::new(&game.config), &opts),
        HeuristicType::Null => run(&game, &NullHeuristic, &opts),
    };

    let moves = match outcome? {
        Outcome::Found(moves) => moves,
        Outcome::NotFound => bail!("No solution"),
        Outcome::Aborted { expanded } => bail!("Search aborted after {expanded} boards"),
    };
    let end = game.replay(&moves).context("Solution does not replay")?;
    ensure!(end.is_goal(&game.config), "Solution does not reach the goal");

    let aggregated = aggregate(&moves);
    let text = render(&aggregated);
    match &args.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} moves written to {}",
                style("Solved:").green().bold(),
                aggregated.len(),
                path.display()
            );
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run(game: &Game, heuristic: &impl Heuristic, opts: &SearchOptions) -> Result<Outcome> {
    let pb = ProgressBar::new_spinner().with_style(ProgressStyle::with_template(
        "{spinner} {pos} boards expanded [{elapsed}] {per_sec}",
    )?);
    pb.enable_steady_tick(Duration::from_millis(100));
    let outcome = solve::astar(game, heuristic, opts, || pb.inc(1));
    pb.finish_and_clear();
    Ok(outcome)
}
