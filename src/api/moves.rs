//! Move attempts
//!
//! Validation and execution in one step, for a player proposing a move.

use tracing::debug;

use crate::board::Board;
use crate::error::{IllegalMove, RulesResult};
use crate::execute::apply;
use crate::history::MoveHistory;
use crate::types::{Move, Piece, PieceType, Square};
use crate::validation::legal_moves_from;

/// Result of [`attempt_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The move was legal and has been applied
    Success(Move),
    /// The move was rejected; board and history are untouched
    Illegal(IllegalMove),
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::Success(_))
    }

    pub fn into_result(self) -> Result<Move, IllegalMove> {
        match self {
            MoveOutcome::Success(mv) => Ok(mv),
            MoveOutcome::Illegal(reason) => Err(reason),
        }
    }
}

/// Validate a proposed move and, if legal, apply it
///
/// `piece` is the piece the caller believes stands on `from`. `promotion` must be given
/// for a pawn reaching the far row and must be absent otherwise.
///
/// # Returns
///
/// - `Ok(MoveOutcome::Success(mv))` - `mv` was applied to `board` and appended to `history`
/// - `Ok(MoveOutcome::Illegal(reason))` - nothing was mutated
///
/// # Errors
///
/// [`RulesError::MissingKing`](crate::error::RulesError::MissingKing) if the mover has
/// no king, which means the board itself is malformed.
///
/// # Examples
///
/// ```rust
/// use chess_rules::{attempt_move, Board, MoveHistory, MoveOutcome, Square};
///
/// let mut board = Board::starting_position();
/// let mut history = MoveHistory::new();
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
/// let pawn = board.piece_at(e2).unwrap();
///
/// let outcome = attempt_move(&mut board, &mut history, pawn, e2, e4, None).unwrap();
/// assert!(outcome.is_success());
/// assert_eq!(board.piece_at(e4), Some(pawn));
/// ```
pub fn attempt_move(
    board: &mut Board,
    history: &mut MoveHistory,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
) -> RulesResult<MoveOutcome> {
    let Some(occupant) = board.piece_at(from) else {
        return Ok(reject(IllegalMove::EmptyOrigin { square: from }));
    };

    if occupant != piece {
        return Ok(reject(IllegalMove::PieceMismatch { square: from }));
    }

    let candidates = legal_moves_from(board, from, history)?;

    if let Some(&mv) = candidates
        .iter()
        .find(|mv| mv.same_action(from, to, promotion))
    {
        apply(board, history, mv);
        return Ok(MoveOutcome::Success(mv));
    }

    let needs_promotion = promotion.is_none()
        && candidates
            .iter()
            .any(|mv| mv.to == to && mv.promotion.is_some());

    let reason = if needs_promotion {
        IllegalMove::PromotionRequired { from, to }
    } else {
        IllegalMove::NotLegal { from, to }
    };

    Ok(reject(reason))
}

fn reject(reason: IllegalMove) -> MoveOutcome {
    debug!("[RULES] {reason}");
    MoveOutcome::Illegal(reason)
}
