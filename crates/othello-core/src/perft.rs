use crate::board::Board;
use crate::move_list::MoveList;
use crate::square::BoardSize;

/// Executes a perft run starting from the initial position of a board size.
///
/// # Arguments
///
/// * `size` - Board geometry.
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(size: BoardSize, depth: u32) -> u64 {
    perft(&Board::new(size), depth)
}

/// Counts the leaves of the move tree below `board`.
///
/// A pass does not consume depth, and a position where neither side can move
/// counts as a single leaf.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = MoveList::new(board);
    if move_list.is_empty() {
        let next = board.switch_players();
        return if next.has_legal_moves() {
            perft(&next, depth)
        } else {
            1
        };
    }

    if depth == 1 {
        return move_list.count() as u64;
    }
    move_list
        .iter()
        .map(|mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}
