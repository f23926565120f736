//! Game loop: turn alternation, forced passes and game termination.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::GameConfig;
use crate::disc::Disc;
use crate::error::{ConfigError, GameError};
use crate::move_list::MoveList;
use crate::ply_cache::PlyCache;
use crate::search::Search;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::strategy::Strategy;

/// Final outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

/// Outcome and final disc counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub black: u32,
    pub white: u32,
}

impl GameResult {
    /// Builds the result from final disc counts.
    pub fn from_counts(black: u32, white: u32) -> GameResult {
        let outcome = match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::BlackWins,
            std::cmp::Ordering::Less => Outcome::WhiteWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        GameResult {
            outcome,
            black,
            white,
        }
    }

    /// Returns `sign(black - white)`: 1 if Black won, -1 if White won, 0 for a draw.
    pub fn code(&self) -> i32 {
        (self.black as i32 - self.white as i32).signum()
    }

    /// Returns the winning side, `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        match self.outcome {
            Outcome::BlackWins => Some(Disc::Black),
            Outcome::WhiteWins => Some(Disc::White),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(disc) => write!(f, "{} wins", disc.name())?,
            None => write!(f, "Draw")?,
        }
        write!(f, " {}-{}", self.black, self.white)
    }
}

/// What happened during one call to [`Game::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// `disc` placed a disc on `sq`.
    Played { disc: Disc, sq: Square },
    /// `disc` had no legal move and passed.
    Passed(Disc),
    /// Neither side can move.
    Finished(GameResult),
}

/// Display and input collaborator of the game loop.
pub trait Frontend {
    /// Shows the current position. Called before every human move, and
    /// before every bot move when display is enabled.
    fn render(&mut self, _game: &Game) {}

    /// Asks a human for a move.
    ///
    /// # Returns
    ///
    /// One of the squares of `moves`, or `None` to abort the game.
    fn choose_move(&mut self, game: &Game, moves: &MoveList) -> Option<Square>;

    /// Reports the end of the game.
    fn game_over(&mut self, _game: &Game, _result: &GameResult) {}
}

/// Frontend for unattended games. Cannot play human turns.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Frontend for Headless {
    fn choose_move(&mut self, _game: &Game, _moves: &MoveList) -> Option<Square> {
        None
    }
}

/// A game in progress.
pub struct Game {
    config: GameConfig,
    board: Board,
    side_to_move: Disc,
    last_move: Option<Square>,
    last_search: Option<SearchResult>,
    n_plies: u32,
    result: Option<GameResult>,
    cache: PlyCache,
    rng: StdRng,
}

impl Game {
    /// Creates a game in the start position, Black to move.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the configuration is rejected.
    pub fn new(config: &GameConfig) -> Result<Game, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_size());
        Ok(Game::with_board(config.clone(), board, Disc::Black))
    }

    /// Creates a game from an existing position.
    ///
    /// The size of `board` replaces the configured size.
    ///
    /// # Arguments
    ///
    /// * `config` - Game parameters
    /// * `board` - Position, seen from `side_to_move`
    /// * `side_to_move` - Which player moves next
    pub fn from_board(
        config: &GameConfig,
        board: Board,
        side_to_move: Disc,
    ) -> Result<Game, ConfigError> {
        assert!(side_to_move != Disc::Empty, "side to move must be a colour");
        let config = GameConfig {
            size: board.size.get(),
            ..config.clone()
        };
        config.validate()?;
        Ok(Game::with_board(config, board, side_to_move))
    }

    fn with_board(config: GameConfig, board: Board, side_to_move: Disc) -> Game {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Game {
            config,
            board,
            side_to_move,
            last_move: None,
            last_search: None,
            n_plies: 0,
            result: None,
            cache: PlyCache::new(),
            rng,
        }
    }

    /// Returns the current position, seen from the side to move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the game parameters.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the square of the last move played, if the last ply was not a pass.
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Returns the result of the most recent search.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Returns the number of plies resolved so far, passes included.
    pub fn n_plies(&self) -> u32 {
        self.n_plies
    }

    /// Returns the result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the ply cache of the current ply.
    pub fn ply_cache(&self) -> &PlyCache {
        &self.cache
    }

    /// Returns the disc counts as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        let player = self.board.get_player_count();
        let opponent = self.board.get_opponent_count();
        match self.side_to_move {
            Disc::Black => (player, opponent),
            _ => (opponent, player),
        }
    }

    /// Returns the legal moves of the side to move.
    pub fn legal_moves(&self) -> Bitboard {
        self.board.get_moves()
    }

    /// Plays one ply.
    ///
    /// A side without legal moves passes when its opponent can move; when
    /// neither side can, the game is finished. Either way the ply resolves and
    /// the ply cache is cleared.
    ///
    /// # Errors
    ///
    /// [`GameError::Aborted`] when the frontend supplies no move,
    /// [`GameError::IllegalMove`] when it supplies a square that is not a
    /// legal move.
    pub fn step(&mut self, frontend: &mut dyn Frontend) -> Result<Turn, GameError> {
        if let Some(result) = self.result {
            return Ok(Turn::Finished(result));
        }

        let side = self.side_to_move;
        let moves = self.cache.moves(0, &self.board);
        if moves.is_empty() {
            let passed = self.board.switch_players();
            if self.cache.moves(0, &passed).is_empty() {
                return Ok(Turn::Finished(self.finish(frontend)));
            }

            log::trace!("{} has no legal move and passes", side.name());
            self.board = passed;
            self.side_to_move = side.opposite();
            self.resolve_ply();
            return Ok(Turn::Passed(side));
        }

        let strategy = self.config.strategy(side);
        if self.config.display || strategy == Strategy::Human {
            frontend.render(self);
        }

        let choice = match self.config.search_options(strategy) {
            Some(options) => {
                let result = Search::new(options).run(&self.board, &mut self.cache, &mut self.rng);
                let sq = result.best_move;
                self.last_search = Some(result);
                sq
            }
            None if strategy == Strategy::Random => {
                moves.iter().choose(&mut self.rng).map(|mv| mv.sq)
            }
            None => frontend.choose_move(self, &moves),
        };

        let sq = choice.ok_or(GameError::Aborted(side.name()))?;
        let mv = moves
            .find(sq)
            .ok_or_else(|| GameError::IllegalMove(self.board.size.label(sq)))?;

        self.board = self.board.make_move(mv);
        self.side_to_move = side.opposite();
        self.last_move = Some(sq);
        self.resolve_ply();
        Ok(Turn::Played { disc: side, sq })
    }

    /// Plays until neither side can move.
    ///
    /// # Errors
    ///
    /// Propagates the first error of [`Game::step`].
    pub fn play(&mut self, frontend: &mut dyn Frontend) -> Result<GameResult, GameError> {
        loop {
            if let Turn::Finished(result) = self.step(frontend)? {
                return Ok(result);
            }
        }
    }

    fn resolve_ply(&mut self) {
        self.n_plies += 1;
        self.cache.clear();
    }

    fn finish(&mut self, frontend: &mut dyn Frontend) -> GameResult {
        let (black, white) = self.score();
        let result = GameResult::from_counts(black, white);
        self.result = Some(result);
        self.cache.clear();

        log::info!(
            "{} vs {}: {result} after {} plies",
            self.config.black,
            self.config.white,
            self.n_plies
        );
        frontend.game_over(self, &result);
        result
    }
}
