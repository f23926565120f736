//! Runs a batch of games and reports statistics.

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use num_format::{Locale, ToFormattedString};
use othello_core::config::GameConfig;
use othello_core::error::GameError;
use othello_core::game::{Frontend, Game, GameResult, Headless, Outcome, Turn};
use othello_core::strategy::Strategy;

use crate::frontend::{TerminalFrontend, format_result};

/// Aggregated results of a batch.
#[derive(Debug, Default)]
pub struct Statistics {
    pub games: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub black_discs: u64,
    pub white_discs: u64,
    pub nodes: u64,
}

impl Statistics {
    fn record(&mut self, result: &GameResult, nodes: u64) {
        self.games += 1;
        match result.outcome {
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.black_discs += result.black as u64;
        self.white_discs += result.white as u64;
        self.nodes += nodes;
    }

    fn percentage(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.games as f64
        }
    }
}

/// Plays `config.repetitions` games, each on a fresh board.
///
/// Games involving a human, or played with `display`, go through the
/// terminal frontend; the others run headless behind a progress bar.
/// A game aborted by a human ends the batch early.
pub fn run(config: &GameConfig) -> anyhow::Result<Statistics> {
    let interactive = config.display
        || config.black == Strategy::Human
        || config.white == Strategy::Human;
    let progress = (!interactive && config.repetitions > 1)
        .then(|| create_progress_bar(config.repetitions as u64));

    let mut terminal = TerminalFrontend::new();
    let mut headless = Headless;
    let mut stats = Statistics::default();
    let start = Instant::now();

    for i in 0..config.repetitions {
        let game_config = GameConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(i as u64)),
            ..config.clone()
        };
        let mut game = Game::new(&game_config)?;
        let frontend: &mut dyn Frontend = if interactive {
            &mut terminal
        } else {
            &mut headless
        };

        match play_game(&mut game, frontend, progress.as_ref()) {
            Ok((result, nodes)) => {
                if !interactive && config.repetitions == 1 {
                    println!("{}", format_result(&result));
                }
                stats.record(&result, nodes);
            }
            Err(GameError::Aborted(side)) => {
                println!("Game aborted by {side}.");
                break;
            }
            Err(err) => return Err(err.into()),
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    if config.repetitions > 1 {
        print_summary(config, &stats, start.elapsed());
    }
    Ok(stats)
}

/// Plays one game to the end, returning the result and the nodes searched.
fn play_game(
    game: &mut Game,
    frontend: &mut dyn Frontend,
    progress: Option<&ProgressBar>,
) -> Result<(GameResult, u64), GameError> {
    let verbose = game.config().verbose;
    let mut nodes = 0;

    loop {
        let line = match game.step(frontend)? {
            Turn::Finished(result) => return Ok((result, nodes)),
            Turn::Passed(disc) => format!("{} passes", disc.name()),
            Turn::Played { disc, sq } => {
                let label = game.board().size.label(sq);
                match game.last_search() {
                    Some(search) if game.config().strategy(disc).is_search() => {
                        nodes += search.n_nodes;
                        format!(
                            "{} plays {label} (score {}, depth {}, {} nodes, {} tied{})",
                            disc.name(),
                            search.score,
                            search.depth,
                            search.n_nodes.to_formatted_string(&Locale::en),
                            search.best_moves.len(),
                            if search.aborted { ", budget exhausted" } else { "" },
                        )
                    }
                    _ => format!("{} plays {label}", disc.name()),
                }
            }
        };

        if verbose {
            match progress {
                Some(pb) => pb.println(line),
                None => println!("{line}"),
            }
        }
    }
}

fn create_progress_bar(total_games: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(total_games);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%) {elapsed_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    progress_bar
}

fn print_summary(config: &GameConfig, stats: &Statistics, elapsed: Duration) {
    let per_game = elapsed.as_secs_f64() * 1000.0 / stats.games.max(1) as f64;
    let avg_discs = |discs: u64| discs as f64 / stats.games.max(1) as f64;

    println!();
    println!(
        "{} {} games in {:.2}s ({per_game:.1} ms/game)",
        "Played".bold(),
        stats.games,
        elapsed.as_secs_f64()
    );
    println!(
        "  Black ({:<12}) {} wins ({:5.1}%), avg {:.1} discs",
        config.black.name(),
        format!("{:>5}", stats.black_wins).bright_green(),
        stats.percentage(stats.black_wins),
        avg_discs(stats.black_discs),
    );
    println!(
        "  White ({:<12}) {} wins ({:5.1}%), avg {:.1} discs",
        config.white.name(),
        format!("{:>5}", stats.white_wins).bright_yellow(),
        stats.percentage(stats.white_wins),
        avg_discs(stats.white_discs),
    );
    println!(
        "  Draws {:>20} ({:5.1}%)",
        stats.draws.to_string().bright_cyan(),
        stats.percentage(stats.draws),
    );
    if stats.nodes > 0 {
        println!(
            "  Nodes searched: {}",
            stats.nodes.to_formatted_string(&Locale::en)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_record() {
        let mut stats = Statistics::default();
        stats.record(&GameResult::from_counts(40, 24), 100);
        stats.record(&GameResult::from_counts(20, 44), 50);
        stats.record(&GameResult::from_counts(32, 32), 0);
        stats.record(&GameResult::from_counts(33, 31), 0);

        assert_eq!(stats.games, 4);
        assert_eq!(stats.black_wins, 2);
        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.nodes, 150);
        assert_eq!(stats.percentage(stats.black_wins), 50.0);
    }

    #[test]
    fn test_headless_batch() {
        let config = GameConfig {
            black: Strategy::Absolute,
            white: Strategy::Random,
            depth: 1,
            repetitions: 3,
            seed: Some(9),
            ..Default::default()
        };
        let stats = run(&config).unwrap();
        assert_eq!(stats.games, 3);
        assert_eq!(stats.black_wins + stats.white_wins + stats.draws, 3);
        assert!(stats.nodes > 0);
    }
}
