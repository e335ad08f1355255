//! Pseudo-legal move generation
//!
//! Produces every move a piece could make by its movement geometry and the current
//! occupancy, without asking whether the move leaves its own king exposed. That last
//! filter belongs to [`crate::validation`].
//!
//! ## Module Structure
//!
//! - `pawn` - pushes, double push, diagonal captures, en passant, promotion fan-out
//! - `knight` - fixed-offset jumps
//! - `sliding` - ray casting for bishops, rooks and queens
//! - `king` - single steps and castling candidates
//! - `attack` - attack detection, built on the same geometry but independent of the
//!   generator so that legality checks never recurse
//!
//! Dispatch is a plain `match` over [`PieceType`]; the piece set is closed.

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;


use crate::board::Board;
use crate::history::MoveHistory;
use crate::types::{Move, Piece, PieceType, Square};

pub use attack::{is_in_check, is_square_attacked};

/// Generate all pseudo-legal moves for `piece` standing on `from`
///
/// The caller is responsible for `piece` actually being on `from`.
pub fn generate_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    history: &MoveHistory,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);

    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(board, piece, from, history, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(board, piece, from, &mut moves),
        PieceType::Bishop => sliding::generate_bishop_moves(board, piece, from, &mut moves),
        PieceType::Rook => sliding::generate_rook_moves(board, piece, from, &mut moves),
        PieceType::Queen => sliding::generate_queen_moves(board, piece, from, &mut moves),
        PieceType::King => king::generate_king_moves(board, piece, from, history, &mut moves),
    }

    moves
}

/// Single-step moves to each offset that is on the board and not friendly-occupied
///
/// Shared by knights and kings.
pub(crate) fn step_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        let occupant = board.piece_at(to);
        if occupant.map_or(true, |other| other.color != piece.color) {
            moves.push(Move::onto(from, to, piece, occupant));
        }
    }
}
