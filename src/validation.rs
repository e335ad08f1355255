//! Legality filtering
//!
//! Composes generation, execution and attack detection. A pseudo-legal move is legal
//! when, after trial-applying it to a disposable clone of the board, the mover's king is
//! not attacked. Castling additionally requires that the king's origin, transit and
//! destination squares are unattacked on the board as it stands before the move.
//!
//! A move that would capture a king is never legal. Such a move only exists in positions
//! no legal game reaches, for instance a hand-built board with the side not to move in
//! check.
//!
//! Every candidate gets its own clone, so trials never leak into the authoritative board
//! or into one another.

use tracing::trace;

use crate::board::Board;
use crate::constants::castle_lane;
use crate::error::RulesResult;
use crate::execute::apply_to_board;
use crate::history::MoveHistory;
use crate::move_gen::{generate_moves, is_square_attacked};
use crate::types::{Color, Move, PieceType, Square};

/// All legal moves for `color`
///
/// # Errors
///
/// [`RulesError::MissingKing`](crate::error::RulesError::MissingKing) if `color` has no
/// king while it has pieces to move.
pub fn legal_moves(board: &Board, color: Color, history: &MoveHistory) -> RulesResult<Vec<Move>> {
    let mut legal = Vec::new();

    for (piece, square) in board.pieces(color) {
        for mv in generate_moves(board, piece, square, history) {
            if keeps_king_safe(board, &mv)? {
                legal.push(mv);
            }
        }
    }

    Ok(legal)
}

/// Legal moves of whichever piece stands on `square`; empty if the square is empty
pub fn legal_moves_from(
    board: &Board,
    square: Square,
    history: &MoveHistory,
) -> RulesResult<Vec<Move>> {
    let Some(piece) = board.piece_at(square) else {
        return Ok(Vec::new());
    };

    let mut legal = Vec::new();
    for mv in generate_moves(board, piece, square, history) {
        if keeps_king_safe(board, &mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Decide whether a single move is legal
///
/// The move must be exactly one the generator would produce for the piece on
/// `mv.from`; a caller-built move with, say, a wrong `captured` field is rejected.
pub fn is_legal(board: &Board, mv: &Move, history: &MoveHistory) -> RulesResult<bool> {
    if board.piece_at(mv.from) != Some(mv.piece) {
        trace!("[RULES] Rejected {} -> {}: piece not on origin", mv.from, mv.to);
        return Ok(false);
    }

    if !generate_moves(board, mv.piece, mv.from, history).contains(mv) {
        trace!("[RULES] Rejected {} -> {}: not pseudo-legal", mv.from, mv.to);
        return Ok(false);
    }

    keeps_king_safe(board, mv)
}

fn keeps_king_safe(board: &Board, mv: &Move) -> RulesResult<bool> {
    let color = mv.piece.color;
    let opponent = color.opponent();

    if mv.captured.is_some_and(|piece| piece.piece_type == PieceType::King) {
        trace!("[RULES] Rejected {} -> {}: kings are never captured", mv.from, mv.to);
        return Ok(false);
    }

    if let Some(lane) = castle_lane(mv.special) {
        let rank = mv.from.row();
        let through_check = lane
            .king_path
            .iter()
            .any(|&col| is_square_attacked(board, Square::at(rank, col), opponent));

        if through_check {
            trace!("[RULES] Rejected castle {:?}: king path attacked", mv.special);
            return Ok(false);
        }
    }

    let mut trial = board.clone();
    apply_to_board(&mut trial, mv);

    let king_square = trial.king_square(color)?;
    let safe = !is_square_attacked(&trial, king_square, opponent);

    if !safe {
        trace!("[RULES] Rejected {} -> {}: king left attacked", mv.from, mv.to);
    }
    Ok(safe)
}
