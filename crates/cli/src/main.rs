mod batch;
mod frontend;

use std::time::Duration;

use clap::Parser;
use othello_core::config::GameConfig;
use othello_core::constants::{DEFAULT_DEPTH, DEFAULT_SIZE};
use othello_core::strategy::Strategy;
use othello_core::types::Depth;

/// Play Othello between humans, random movers and alpha-beta search bots.
///
/// Strategies are given by name or selector: human (0), random (1),
/// positional-a (2), positional-b (3), absolute (4), mobility (5),
/// mixed-a (6), mixed-b (7).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Strategy playing Black (moves first)
    #[arg(short, long, default_value = "human")]
    black: Strategy,

    /// Strategy playing White
    #[arg(short, long, default_value = "mixed-a")]
    white: Strategy,

    /// Board side length (even, 4 to 16)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: Depth,

    /// Show the board before every move, bots included
    #[arg(long)]
    display: bool,

    /// Report every move with its search statistics
    #[arg(short, long)]
    verbose: bool,

    /// Number of games to play
    #[arg(short = 'n', long = "games", default_value_t = 1)]
    games: u32,

    /// Seed for random play and tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Time budget per search in milliseconds
    #[arg(long = "time-limit-ms", value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Node budget per search
    #[arg(long, value_name = "NODES")]
    node_limit: Option<u64>,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            black: self.black,
            white: self.white,
            size: self.size,
            depth: self.depth,
            display: self.display,
            verbose: self.verbose,
            repetitions: self.games,
            seed: self.seed,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            node_limit: self.node_limit,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = cli.into_config();
    config.validate()?;
    batch::run(&config)?;
    Ok(())
}
