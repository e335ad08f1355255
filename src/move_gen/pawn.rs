//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion fan-out
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, only onto an empty square
//! - **Double push**: from the starting row, two squares, if both are empty
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//! - **En passant**: if the previous move was an opponent pawn's double push that landed
//!   beside this pawn, capture it by moving onto the square it skipped
//! - **Promotion**: a move landing on the far row is emitted once per promotion choice

use crate::board::Board;
use crate::history::MoveHistory;
use crate::types::{Move, Piece, PieceType, Square};

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - Current occupancy
/// * `piece` - The pawn
/// * `from` - Square the pawn stands on
/// * `history` - Consulted only for the en passant window
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    history: &MoveHistory,
    moves: &mut Vec<Move>,
) {
    let forward = piece.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            push_with_promotions(Move::quiet(from, one_step, piece), moves);

            if from.row() == piece.color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        moves.push(Move::quiet(from, two_step, piece));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };

        match board.piece_at(target) {
            Some(occupant) if occupant.color != piece.color => {
                push_with_promotions(Move::onto(from, target, piece, Some(occupant)), moves);
            }
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(board, piece, from, target, history) {
                    moves.push(Move::en_passant(from, target, piece, victim));
                }
            }
        }
    }
}

/// The pawn capturable en passant by moving to `target`, if the window is open
///
/// The window is open when the last move was an opponent pawn's double advance that
/// landed on the mover's row in `target`'s column, and that pawn is still there.
fn en_passant_victim(
    board: &Board,
    piece: Piece,
    from: Square,
    target: Square,
    history: &MoveHistory,
) -> Option<Piece> {
    let last = history.last_double_pawn_advance()?;

    if last.piece.color == piece.color
        || last.to.row() != from.row()
        || last.to.col() != target.col()
    {
        return None;
    }

    board
        .piece_at(last.to)
        .filter(|victim| victim.id == last.piece.id && victim.piece_type == PieceType::Pawn)
}

/// Push `mv`, or one copy per promotion choice if it lands on the far row
fn push_with_promotions(mv: Move, moves: &mut Vec<Move>) {
    if mv.to.row() == mv.piece.color.promotion_row() {
        moves.extend(
            PieceType::promotion_choices()
                .iter()
                .map(|&choice| mv.with_promotion(choice)),
        );
    } else {
        moves.push(mv);
    }
}
