//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction in the piece's set, walk the ray one square at a time:
//! 1. Empty square: a move, keep walking
//! 2. Opponent piece: a capture, stop
//! 3. Own piece: not a move, stop

use crate::board::Board;
use crate::constants::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use crate::types::{Move, Piece, Square};

/// Generate moves for a sliding piece along each of `directions`
pub fn generate_sliding_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in from.ray(direction) {
            match board.piece_at(to) {
                None => moves.push(Move::quiet(from, to, piece)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(Move::onto(from, to, piece, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}

pub fn generate_bishop_moves(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, from, &DIAGONALS, moves);
}

pub fn generate_rook_moves(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, from, &ORTHOGONALS, moves);
}

/// Queens move like a bishop or a rook
pub fn generate_queen_moves(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, piece, from, &ALL_DIRECTIONS, moves);
}
