//! Move history
//!
//! An append-only record of every move applied to a board. History is the only source
//! of state-dependent rights:
//!
//! - **Castling**: a king or rook that appears as the mover of any recorded move has lost
//!   its castling right. Pieces are matched by identity, so a rook that is captured on
//!   its home square and replaced by another rook does not hand the right to the newcomer.
//! - **En passant**: only the immediately preceding move can open the window, so the
//!   window closes by itself after one ply.
//!
//! The only mutations are appending after a successful apply and clearing on reset.

use crate::types::{Move, PieceId, PieceType};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory::default()
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Forget every move (game reset)
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// The most recent move, if any
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of half-moves applied so far
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Whether the piece with this id has ever been the mover
    pub fn has_moved(&self, id: PieceId) -> bool {
        self.moves.iter().any(|mv| mv.piece.id == id)
    }

    /// The previous move, if it was a two-square pawn advance
    pub fn last_double_pawn_advance(&self) -> Option<&Move> {
        self.last().filter(|mv| {
            mv.piece.piece_type == PieceType::Pawn
                && mv.from.col() == mv.to.col()
                && mv.from.row().abs_diff(mv.to.row()) == 2
        })
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Piece, Square};

    fn pawn(id: u32, color: Color) -> Piece {
        Piece::new(PieceId(id), PieceType::Pawn, color)
    }

    #[test]
    fn test_has_moved_tracks_identity() {
        let mut history = MoveHistory::new();
        let mover = pawn(3, Color::Light);
        history.push(Move::quiet(Square::at(6, 4), Square::at(5, 4), mover));

        assert!(history.has_moved(PieceId(3)));
        assert!(!history.has_moved(PieceId(4)), "Other pieces keep their rights");
    }

    #[test]
    fn test_last_double_pawn_advance_only_looks_at_last_move() {
        //! A double advance opens the en passant window for exactly one ply
        let mut history = MoveHistory::new();
        history.push(Move::quiet(
            Square::at(6, 4),
            Square::at(4, 4),
            pawn(1, Color::Light),
        ));
        assert!(history.last_double_pawn_advance().is_some());

        history.push(Move::quiet(
            Square::at(1, 0),
            Square::at(2, 0),
            pawn(2, Color::Dark),
        ));
        assert!(
            history.last_double_pawn_advance().is_none(),
            "Window closes once another move is made"
        );
    }

    #[test]
    fn test_clear_resets_history() {
        let mut history = MoveHistory::new();
        history.push(Move::quiet(
            Square::at(1, 1),
            Square::at(2, 1),
            pawn(9, Color::Dark),
        ));
        history.clear();

        assert!(history.is_empty());
        assert!(!history.has_moved(PieceId(9)));
    }
}
