//! King move generation
//!
//! Kings move one square in any direction, plus castling.
//!
//! ## Castling candidates
//!
//! For each side a castling move is generated when:
//! - the king stands on its origin square and has never moved
//! - a rook of the same color stands on that side's corner and has never moved
//! - every square strictly between them is empty
//!
//! Whether the king would pass through an attacked square is checked by the validator.

use crate::board::Board;
use crate::constants::{CastleLane, CASTLE_LANES, KING_OFFSETS, KING_START_COL};
use crate::history::MoveHistory;
use crate::types::{Move, Piece, PieceType, Square};

/// Generate king moves from a given square, castling included
pub fn generate_king_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    history: &MoveHistory,
    moves: &mut Vec<Move>,
) {
    super::step_moves(board, piece, from, &KING_OFFSETS, moves);

    moves.extend(
        CASTLE_LANES
            .iter()
            .filter_map(|lane| castling_candidate(board, piece, from, history, lane)),
    );
}

fn castling_candidate(
    board: &Board,
    king: Piece,
    from: Square,
    history: &MoveHistory,
    lane: &CastleLane,
) -> Option<Move> {
    let rank = king.color.back_rank();

    if from != Square::at(rank, KING_START_COL) || history.has_moved(king.id) {
        return None;
    }

    let rook = board
        .piece_at(Square::at(rank, lane.rook_from))
        .filter(|rook| rook.piece_type == PieceType::Rook && rook.color == king.color)?;

    if history.has_moved(rook.id) {
        return None;
    }

    let path_clear = lane
        .between
        .iter()
        .all(|&col| board.is_empty(Square::at(rank, col)));

    path_clear.then(|| Move::castle(from, Square::at(rank, lane.king_to), king, lane.special))
}
