//! Move-selection strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::eval::{Evaluator, Table};

/// How a side picks its moves.
///
/// The numeric selector of each variant is its position in [`Strategy::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Moves are supplied by the frontend.
    Human,
    /// Uniformly random legal move.
    Random,
    PositionalA,
    PositionalB,
    Absolute,
    Mobility,
    MixedA,
    MixedB,
}

impl Strategy {
    /// All strategies, ordered by selector.
    pub const ALL: [Strategy; 8] = [
        Strategy::Human,
        Strategy::Random,
        Strategy::PositionalA,
        Strategy::PositionalB,
        Strategy::Absolute,
        Strategy::Mobility,
        Strategy::MixedA,
        Strategy::MixedB,
    ];

    /// Looks up a strategy by numeric selector.
    pub fn from_selector(selector: u8) -> Result<Strategy, ConfigError> {
        Strategy::ALL
            .get(selector as usize)
            .copied()
            .ok_or_else(|| ConfigError::InvalidStrategy(selector.to_string()))
    }

    /// Returns the numeric selector.
    pub fn selector(self) -> u8 {
        self as u8
    }

    /// Returns the name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Human => "human",
            Strategy::Random => "random",
            Strategy::PositionalA => "positional-a",
            Strategy::PositionalB => "positional-b",
            Strategy::Absolute => "absolute",
            Strategy::Mobility => "mobility",
            Strategy::MixedA => "mixed-a",
            Strategy::MixedB => "mixed-b",
        }
    }

    /// Returns the evaluator of a search strategy, `None` for human and random play.
    pub fn evaluator(self) -> Option<Evaluator> {
        match self {
            Strategy::Human | Strategy::Random => None,
            Strategy::PositionalA => Some(Evaluator::Positional(Table::A)),
            Strategy::PositionalB => Some(Evaluator::Positional(Table::B)),
            Strategy::Absolute => Some(Evaluator::Absolute),
            Strategy::Mobility => Some(Evaluator::Mobility),
            Strategy::MixedA => Some(Evaluator::Mixed(Table::A)),
            Strategy::MixedB => Some(Evaluator::Mixed(Table::B)),
        }
    }

    /// Returns `true` if the strategy runs the search engine.
    pub fn is_search(self) -> bool {
        self.evaluator().is_some()
    }

    /// Returns `true` if the strategy can only play on the default board size.
    pub fn requires_default_size(self) -> bool {
        self.evaluator()
            .is_some_and(|evaluator| evaluator.requires_default_size())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Parses a strategy name or a numeric selector, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<u8>() {
            return Strategy::from_selector(selector);
        }
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidStrategy(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
