//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through the attacking side's pieces and
//! ask whether each one's capture pattern reaches the target. Patterns come from the same
//! offset and direction tables as generation, evaluated purely as attacks:
//!
//! - Pawns attack the two diagonal squares ahead, never straight ahead
//! - Knights and kings attack their fixed offsets
//! - Sliders attack along their rays up to and including the first occupied square
//!
//! Nothing here calls into generation or validation. A king "attacks" the squares around
//! it regardless of whether stepping there would be legal, so there is no recursion.

use crate::board::Board;
use crate::constants::{ALL_DIRECTIONS, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use crate::error::RulesResult;
use crate::types::{Color, Piece, PieceType, Square};

/// Check if `square` is attacked by any piece of `by_color`
///
/// The occupant of `square` (if any) does not matter: a square holding one of
/// `by_color`'s own pieces is still "attacked" if another of its pieces defends it.
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .occupied()
        .filter(|(piece, _)| piece.color == by_color)
        .any(|(piece, from)| attacks(board, piece, from, square))
}

/// Check if `color`'s king is attacked by the opponent
///
/// # Errors
///
/// [`RulesError::MissingKing`](crate::error::RulesError::MissingKing) if `color` has no
/// king on the board.
pub fn is_in_check(board: &Board, color: Color) -> RulesResult<bool> {
    let king_square = board.king_square(color)?;
    Ok(is_square_attacked(board, king_square, color.opponent()))
}

fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => pawn_attacks(piece.color, from, target),
        PieceType::Knight => offset_attacks(from, target, &KNIGHT_OFFSETS),
        PieceType::King => offset_attacks(from, target, &KING_OFFSETS),
        PieceType::Bishop => ray_attacks(board, from, target, &DIAGONALS),
        PieceType::Rook => ray_attacks(board, from, target, &ORTHOGONALS),
        PieceType::Queen => ray_attacks(board, from, target, &ALL_DIRECTIONS),
    }
}

fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    [-1, 1]
        .iter()
        .any(|&d_col| from.offset(color.forward(), d_col) == Some(target))
}

fn offset_attacks(from: Square, target: Square, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(target))
}

fn ray_attacks(board: &Board, from: Square, target: Square, directions: &[(i8, i8)]) -> bool {
    directions.iter().any(|&direction| {
        for square in from.ray(direction) {
            if square == target {
                return true;
            }
            if !board.is_empty(square) {
                return false;
            }
        }
        false
    })
}
