//! Game configuration.

use std::time::Duration;

use crate::constants::{DEFAULT_DEPTH, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::disc::Disc;
use crate::error::ConfigError;
use crate::search::SearchOptions;
use crate::search::search_context::SearchLimits;
use crate::square::BoardSize;
use crate::strategy::Strategy;
use crate::types::Depth;

/// Parameters of a game, or of a batch of games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Strategy of the first player.
    pub black: Strategy,
    /// Strategy of the second player.
    pub white: Strategy,
    /// Board side length.
    pub size: usize,
    /// Depth limit of the search strategies.
    pub depth: Depth,
    /// Render the board before bot moves too, not only for humans.
    pub display: bool,
    /// Report per-move search details.
    pub verbose: bool,
    /// Number of games in a batch.
    pub repetitions: u32,
    /// Seed for random play and tie-breaking; fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Wall-clock budget per search.
    pub time_limit: Option<Duration>,
    /// Node budget per search.
    pub node_limit: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            black: Strategy::Human,
            white: Strategy::MixedA,
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            display: false,
            verbose: false,
            repetitions: 1,
            seed: None,
            time_limit: None,
            node_limit: None,
        }
    }
}

impl GameConfig {
    /// Checks the configuration before any game state is created.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: board size out of range or odd, a
    /// table-based strategy on a non-default board, a search strategy with
    /// depth 0, or an empty batch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall(self.size));
        }
        if !self.size.is_multiple_of(2) {
            return Err(ConfigError::OddSize(self.size));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge(self.size));
        }

        for strategy in [self.black, self.white] {
            if strategy.requires_default_size() && self.size != DEFAULT_SIZE {
                return Err(ConfigError::TableRequiresDefaultSize {
                    strategy,
                    size: self.size,
                });
            }
            if strategy.is_search() && self.depth == 0 {
                return Err(ConfigError::ZeroDepth(strategy));
            }
        }

        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        Ok(())
    }

    /// Returns the board geometry. Only meaningful after [`GameConfig::validate`].
    pub fn board_size(&self) -> BoardSize {
        BoardSize::new(self.size)
    }

    /// Returns the strategy playing `disc`.
    ///
    /// # Panics
    ///
    /// Panics on [`Disc::Empty`].
    pub fn strategy(&self, disc: Disc) -> Strategy {
        match disc {
            Disc::Black => self.black,
            Disc::White => self.white,
            Disc::Empty => panic!("empty squares have no strategy"),
        }
    }

    /// Returns the search options for `strategy`, `None` if it does not search.
    pub fn search_options(&self, strategy: Strategy) -> Option<SearchOptions> {
        strategy.evaluator().map(|evaluator| SearchOptions {
            depth: self.depth,
            evaluator,
            limits: SearchLimits {
                time_limit: self.time_limit,
                max_nodes: self.node_limit,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize) -> GameConfig {
        GameConfig {
            black: Strategy::Random,
            white: Strategy::Absolute,
            size,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_board_sizes() {
        assert_eq!(config(2).validate(), Err(ConfigError::SizeTooSmall(2)));
        assert_eq!(config(3).validate(), Err(ConfigError::SizeTooSmall(3)));
        assert_eq!(config(7).validate(), Err(ConfigError::OddSize(7)));
        assert_eq!(config(18).validate(), Err(ConfigError::SizeTooLarge(18)));
        for size in [4, 6, 8, 10, 16] {
            assert_eq!(config(size).validate(), Ok(()), "size {size}");
        }
    }

    #[test]
    fn test_tables_need_default_size() {
        let cfg = GameConfig {
            white: Strategy::MixedB,
            ..config(6)
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TableRequiresDefaultSize {
                strategy: Strategy::MixedB,
                size: 6
            })
        );
    }

    #[test]
    fn test_zero_depth() {
        let cfg = GameConfig {
            depth: 0,
            ..config(8)
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroDepth(Strategy::Absolute))
        );

        let random_only = GameConfig {
            white: Strategy::Random,
            depth: 0,
            ..config(8)
        };
        assert_eq!(random_only.validate(), Ok(()));
    }

    #[test]
    fn test_zero_repetitions() {
        let cfg = GameConfig {
            repetitions: 0,
            ..config(8)
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRepetitions));
    }

    #[test]
    fn test_search_options() {
        let cfg = GameConfig {
            node_limit: Some(1000),
            ..config(8)
        };
        assert!(cfg.search_options(Strategy::Random).is_none());
        let options = cfg.search_options(Strategy::Absolute).unwrap();
        assert_eq!(options.depth, DEFAULT_DEPTH);
        assert_eq!(options.limits.max_nodes, Some(1000));
        assert_eq!(cfg.strategy(Disc::White), Strategy::Absolute);
    }
}
