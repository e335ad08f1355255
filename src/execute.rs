//! Move execution
//!
//! Applies an already validated move to a board. No legality checks happen here; use
//! [`crate::validation::is_legal`] first, or go through
//! [`attempt_move`](crate::api::attempt_move) which does both.

use tracing::{debug, trace};

use crate::board::Board;
use crate::constants::castle_lane;
use crate::history::MoveHistory;
use crate::types::{Move, SpecialMove, Square};

/// Apply `mv` to the authoritative board and record it in history
///
/// # Examples
///
/// ```rust
/// use chess_rules::{apply, legal_moves, Board, Color, MoveHistory};
///
/// let mut board = Board::starting_position();
/// let mut history = MoveHistory::new();
/// let first = legal_moves(&board, Color::Light, &history).unwrap()[0];
///
/// apply(&mut board, &mut history, first);
/// assert_eq!(history.len(), 1);
/// assert!(board.is_empty(first.from));
/// ```
pub fn apply(board: &mut Board, history: &mut MoveHistory, mv: Move) {
    apply_to_board(board, &mv);
    history.push(mv);

    debug!(
        "[RULES] Applied {:?} {} -> {} (ply {})",
        mv.piece.piece_type,
        mv.from,
        mv.to,
        history.len()
    );
}

/// Perform only the board mutation of `mv`
///
/// Used on the disposable clones the validator builds; those trials never touch history.
pub fn apply_to_board(board: &mut Board, mv: &Move) {
    board.clear(mv.from);

    match mv.special {
        SpecialMove::EnPassant => {
            // The captured pawn sits beside the mover, one row behind the destination
            let victim_square = Square::at(mv.from.row(), mv.to.col());
            board.clear(victim_square);
        }
        SpecialMove::CastleKingside | SpecialMove::CastleQueenside => {
            if let Some(lane) = castle_lane(mv.special) {
                let rank = mv.from.row();
                if let Some(rook) = board.clear(Square::at(rank, lane.rook_from)) {
                    board.put(Square::at(rank, lane.rook_to), rook);
                }
            }
        }
        SpecialMove::None => {}
    }

    let landed = match mv.promotion {
        Some(piece_type) => mv.piece.promoted_to(piece_type),
        None => mv.piece,
    };
    board.put(mv.to, landed);

    trace!("[RULES] Board after {} -> {}:\n{}", mv.from, mv.to, board);
}
