//! Error types.

use thiserror::Error;

use crate::strategy::Strategy;

/// A rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is too small (minimum is {min})", min = crate::constants::MIN_SIZE)]
    SizeTooSmall(usize),

    #[error("board size {0} is odd")]
    OddSize(usize),

    #[error("board size {0} is too large (maximum is {max})", max = crate::constants::MAX_SIZE)]
    SizeTooLarge(usize),

    #[error("unknown strategy '{0}' (expected a selector 0-7 or a strategy name)")]
    InvalidStrategy(String),

    #[error("strategy {strategy} needs an {default}x{default} board, got {size}x{size}", default = crate::constants::DEFAULT_SIZE)]
    TableRequiresDefaultSize { strategy: Strategy, size: usize },

    #[error("strategy {0} needs a search depth of at least 1")]
    ZeroDepth(Strategy),

    #[error("number of games must be at least 1")]
    ZeroRepetitions,
}

/// An error raised while a game is being played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {0}")]
    IllegalMove(String),

    #[error("game aborted: no move supplied for {0}")]
    Aborted(&'static str),
}
