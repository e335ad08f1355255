//! Read-only position queries
//!
//! Nothing in here mutates the board or the history.

use crate::board::Board;
use crate::error::RulesResult;
use crate::history::MoveHistory;
use crate::move_gen;
use crate::types::{Color, Move, Square};
use crate::validation;

/// Every legal move for `color` in this position
///
/// # Examples
///
/// ```rust
/// use chess_rules::{legal_moves, reset_to_starting_position, Color, MoveHistory};
///
/// let board = reset_to_starting_position();
/// let moves = legal_moves(&board, Color::Light, &MoveHistory::new()).unwrap();
/// assert_eq!(moves.len(), 20);
/// ```
pub fn legal_moves(board: &Board, color: Color, history: &MoveHistory) -> RulesResult<Vec<Move>> {
    validation::legal_moves(board, color, history)
}

/// Legal moves of the piece on `square`, for highlighting a selected piece's targets
pub fn legal_moves_from(
    board: &Board,
    square: Square,
    history: &MoveHistory,
) -> RulesResult<Vec<Move>> {
    validation::legal_moves_from(board, square, history)
}

/// Whether `color`'s king is currently attacked
pub fn is_in_check(board: &Board, color: Color) -> RulesResult<bool> {
    move_gen::is_in_check(board, color)
}
