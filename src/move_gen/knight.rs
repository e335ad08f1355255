//! Knight move generation
//!
//! Knights jump in an L-shape (2+1 or 1+2 squares), ignoring anything in between.
//! A destination is valid if it is on the board and not held by a friendly piece.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Move, Piece, Square};

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    super::step_moves(board, piece, from, &KNIGHT_OFFSETS, moves);
}
