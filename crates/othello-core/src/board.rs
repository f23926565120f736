//! Reversi board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::flip;
use crate::move_list::Move;
use crate::square::{BoardSize, Direction, Square};

/// Represents a Reversi board with bitboards for the player and opponent.
///
/// The board is always seen from the side to move: `player` holds the discs
/// of the player about to move, `opponent` those of the other side. Alongside
/// the discs the board carries its `frontier`, the set of empty cells adjacent
/// to at least one disc, which is the only place a legal move can appear. The
/// frontier is updated incrementally by [`Board::make_move`], so move
/// generation never needs to scan the whole board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard representing the player's discs.
    pub player: Bitboard,
    /// Bitboard representing the opponent's discs.
    pub opponent: Bitboard,
    /// Empty cells adjacent to an occupied cell.
    pub frontier: Bitboard,
    /// Board geometry.
    pub size: BoardSize,
}

impl Default for Board {
    /// Creates an 8x8 board with the standard starting position.
    fn default() -> Self {
        Board::new(BoardSize::default())
    }
}

impl Board {
    /// Creates a board with the standard starting position, Black to move.
    ///
    /// The four centre cells hold White on the main diagonal and Black on
    /// the anti-diagonal, e.g. White on D4/E5 and Black on D5/E4 for 8x8.
    ///
    /// # Arguments
    /// * `size` - Board geometry; must be even and at least 4.
    ///
    /// # Returns
    /// A new `Board` instance.
    pub fn new(size: BoardSize) -> Board {
        let c = size.get() / 2;
        let black = size.square(c - 1, c).bitboard() | size.square(c, c - 1).bitboard();
        let white = size.square(c - 1, c - 1).bitboard() | size.square(c, c).bitboard();
        Board::from_bitboards(black, white, size)
    }

    /// Creates a `Board` from given bitboards, deriving the frontier by a full scan.
    ///
    /// # Arguments
    /// * `player` - Bitboard representing the player's discs.
    /// * `opponent` - Bitboard representing the opponent's discs.
    /// * `size` - Board geometry.
    ///
    /// # Returns
    /// A new `Board` instance.
    ///
    /// # Panics
    /// Panics if the bitboards overlap or reach outside the board.
    pub fn from_bitboards(player: Bitboard, opponent: Bitboard, size: BoardSize) -> Board {
        assert!((player & opponent).is_empty(), "player and opponent discs overlap");
        let occupied = player | opponent;
        assert!(
            (occupied & !size.mask()).is_empty(),
            "discs outside of a {size} board"
        );

        let frontier = size
            .squares()
            .filter(|&sq| !occupied.contains(sq))
            .filter(|&sq| size.neighbors(sq).any(|n| occupied.contains(n)))
            .collect();

        Board {
            player,
            opponent,
            frontier,
            size,
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the cells in row-major order. Whitespace is ignored,
    /// and characters are interpreted as:
    /// - The current player's disc character (e.g., 'X' for Black)
    /// - The opponent's disc character (e.g., 'O' for White)
    /// - anything else (typically '-') for empty squares
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    /// * `size` - Board geometry.
    /// * `current_player` - The current player.
    ///
    /// # Returns
    /// A new `Board` instance.
    pub fn from_string(board_string: &str, size: BoardSize, current_player: Disc) -> Board {
        let mut player = Bitboard::EMPTY;
        let mut opponent = Bitboard::EMPTY;
        let cells = board_string.chars().filter(|c| !c.is_whitespace());
        for (sq, c) in size.squares().zip(cells) {
            if c == current_player.to_char() {
                player = player.set(sq);
            } else if c == current_player.opposite().to_char() {
                opponent = opponent.set(sq);
            }
        }
        Board::from_bitboards(player, opponent, size)
    }

    /// Gets the disc at a specific square from the perspective of the current player.
    ///
    /// # Arguments
    /// * `sq` - The square to check.
    /// * `side_to_move` - The current player's disc.
    ///
    /// # Returns
    /// The disc at the specified square (current player's disc, opponent's disc, or empty).
    #[inline]
    pub fn get_disc_at(&self, sq: Square, side_to_move: Disc) -> Disc {
        if self.player.contains(sq) {
            side_to_move
        } else if self.opponent.contains(sq) {
            side_to_move.opposite()
        } else {
            Disc::Empty
        }
    }

    /// Checks if the game is over (neither player can make a move).
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves() && !self.switch_players().has_legal_moves()
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        self.size.mask() & !(self.player | self.opponent)
    }

    /// Returns the number of discs the current player has on the board.
    #[inline(always)]
    pub fn get_player_count(&self) -> u32 {
        self.player.count()
    }

    /// Returns the number of discs the opponent has on the board.
    #[inline(always)]
    pub fn get_opponent_count(&self) -> u32 {
        self.opponent.count()
    }

    /// Returns the number of discs of both colours on the board.
    #[inline(always)]
    pub fn get_disc_count(&self) -> u32 {
        (self.player | self.opponent).count()
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn get_empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Checks whether any empty cell still touches a disc.
    ///
    /// A board without frontier cells has no legal move for either side.
    #[inline(always)]
    pub fn has_frontier(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Switches the players.
    ///
    /// # Returns
    /// A new `Board` instance with the players switched.
    #[inline(always)]
    pub fn switch_players(&self) -> Board {
        Board {
            player: self.opponent,
            opponent: self.player,
            ..*self
        }
    }

    /// Returns a bitboard representing the valid moves for the current player.
    ///
    /// Only frontier cells are examined; a cell qualifies as soon as one
    /// direction captures.
    ///
    /// # Returns
    /// A bitboard where each set bit represents a valid move for the current player.
    pub fn get_moves(&self) -> Bitboard {
        self.frontier
            .iter()
            .filter(|&sq| {
                Direction::ALL.into_iter().any(|dir| {
                    flip::capture_length(self.size, self.player, self.opponent, sq, dir).is_some()
                })
            })
            .collect()
    }

    /// Checks if the current player has any legal moves.
    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        self.frontier.iter().any(|sq| self.is_legal_move(sq))
    }

    /// Checks if a move to a specific square is legal for the current player.
    ///
    /// # Arguments
    /// * `sq` - The square to check.
    ///
    /// # Returns
    /// `true` if the move is legal, `false` otherwise.
    #[inline]
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.frontier.contains(sq)
            && Direction::ALL.into_iter().any(|dir| {
                flip::capture_length(self.size, self.player, self.opponent, sq, dir).is_some()
            })
    }

    /// Makes a move for the current player.
    ///
    /// The disc is placed on the move square and every recorded capture is
    /// flipped. The frontier loses the move square and gains each of its
    /// empty neighbours.
    ///
    /// # Arguments
    /// * `mv` - A move produced by [`MoveList`](crate::move_list::MoveList) for this board.
    ///
    /// # Returns
    /// The board after the move, seen from the opponent's side (the opponent
    /// is now the player to move).
    ///
    /// # Panics
    /// Panics if the move flips nothing.
    #[inline]
    pub fn make_move(&self, mv: &Move) -> Board {
        let flipped = flip::flipped(self.size, mv.sq, &mv.captures);
        assert!(
            !flipped.is_empty(),
            "move at {} has no capturing direction",
            self.size.label(mv.sq)
        );
        debug_assert!(self.get_empty().contains(mv.sq));
        debug_assert!((flipped & !self.opponent).is_empty());

        let player = self.player | flipped | mv.sq.bitboard();
        let opponent = self.opponent ^ flipped;
        let occupied = player | opponent;
        let frontier = self
            .size
            .neighbors(mv.sq)
            .filter(|&n| !occupied.contains(n))
            .fold(self.frontier.remove(mv.sq), Bitboard::set);

        Board {
            player: opponent,
            opponent: player,
            frontier,
            size: self.size,
        }
    }

    /// Attempts to make a move for the current player.
    ///
    /// # Arguments
    /// * `sq` - The square where the player is attempting to place a disc.
    ///
    /// # Returns
    /// `Some(Board)` with the updated board if the move is valid, `None` otherwise.
    pub fn try_make_move(&self, sq: Square) -> Option<Board> {
        Move::at(self, sq).map(|mv| self.make_move(&mv))
    }

    /// Converts the board to a string representation.
    ///
    /// The output shows the board as a grid with:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty squares
    ///
    /// # Arguments
    /// * `current_player` - The current player (determines which discs are shown as 'X' or 'O').
    ///
    /// # Returns
    /// A string representation of the board with newlines between rows.
    pub fn to_string_as_board(&self, current_player: Disc) -> String {
        let n = self.size.get();
        let mut s = String::with_capacity(n * (n + 1));
        for (i, sq) in self.size.squares().enumerate() {
            if i > 0 && i % n == 0 {
                s.push('\n');
            }
            s.push(self.get_disc_at(sq, current_player).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    /// Formats the board for display, showing Black as the current player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board(Disc::Black))
    }
}
