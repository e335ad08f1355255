//! Board representation
//!
//! An 8x8 grid of optional pieces with no rule knowledge. The board has no notion of
//! whose turn it is; side to move is supplied by the caller on every query.
//!
//! `Board` is plain data and `Clone` is a full deep copy, which is what the validator
//! relies on when it trial-applies a candidate move.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{BACK_RANK_ORDER, BOARD_SIZE};
use crate::error::{RulesError, RulesResult};
use crate::types::{Color, Piece, PieceId, PieceType, Square};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
    /// Next identity handed out by [`Board::spawn`]
    next_id: u32,
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [[None; SIZE]; SIZE],
            next_id: 0,
        }
    }

    /// The canonical initial arrangement
    ///
    /// Back ranks in standard order, pawns on the second row from each side, empty
    /// middle. Ids are handed out Dark first, row by row.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();

        for color in [Color::Dark, Color::Light] {
            let back_rank = color.back_rank();
            let pawn_row = color.pawn_start_row();

            for (col, &piece_type) in BACK_RANK_ORDER.iter().enumerate() {
                let piece = board.fresh(piece_type, color);
                board.put(Square::at(back_rank, col as u8), piece);
            }
            for col in 0..BOARD_SIZE {
                let pawn = board.fresh(PieceType::Pawn, color);
                board.put(Square::at(pawn_row, col), pawn);
            }
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever stood there before
    ///
    /// Fails if the same piece id already stands on a different square.
    pub fn place(&mut self, square: Square, piece: Piece) -> RulesResult<Option<Piece>> {
        if let Some(existing) = self.find_piece(piece.id) {
            if existing != square {
                return Err(RulesError::DuplicatePiece {
                    id: piece.id,
                    square: existing,
                });
            }
        }

        self.next_id = self.next_id.max(piece.id.0.saturating_add(1));
        Ok(self.put(square, piece))
    }

    /// Create a new piece with a fresh id on an empty square
    ///
    /// Fails with `DuplicatePiece` once the id space is exhausted and the last id is
    /// already on the board.
    pub fn spawn(
        &mut self,
        square: Square,
        piece_type: PieceType,
        color: Color,
    ) -> RulesResult<Piece> {
        if !self.is_empty(square) {
            return Err(RulesError::SquareOccupied { square });
        }

        let id = PieceId(self.next_id);
        if let Some(existing) = self.find_piece(id) {
            return Err(RulesError::DuplicatePiece {
                id,
                square: existing,
            });
        }

        let piece = self.fresh(piece_type, color);
        self.put(square, piece);
        Ok(piece)
    }

    /// Empty a square, returning its former occupant
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Unchecked write, for callers that keep the one-square-per-id invariant themselves
    pub(crate) fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].replace(piece)
    }

    fn fresh(&mut self, piece_type: PieceType, color: Color) -> Piece {
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        Piece::new(id, piece_type, color)
    }

    /// Every occupied square in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (piece, square)))
    }

    /// All `(piece, square)` pairs for one color, row-major
    pub fn pieces(&self, color: Color) -> Vec<(Piece, Square)> {
        self.occupied()
            .filter(|(piece, _)| piece.color == color)
            .collect()
    }

    pub fn find_piece(&self, id: PieceId) -> Option<Square> {
        self.occupied()
            .find(|(piece, _)| piece.id == id)
            .map(|(_, square)| square)
    }

    /// Square of `color`'s king
    ///
    /// A board without a king is malformed, so this is an error rather than `None`.
    pub fn king_square(&self, color: Color) -> RulesResult<Square> {
        self.occupied()
            .find(|(piece, _)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(_, square)| square)
            .ok_or(RulesError::MissingKing { color })
    }

    /// Shuffle the contents of all 64 squares
    ///
    /// Pieces keep their ids. The result is generally not a position reachable by play.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cells: Vec<Option<Piece>> = self.squares.iter().flatten().copied().collect();
        cells.shuffle(rng);

        for (cell, square) in cells.into_iter().zip(Square::all()) {
            self.squares[square.row() as usize][square.col() as usize] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.iter() {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        //! The starting arrangement has 32 pieces, back ranks in standard order
        //! and both pawn rows filled
        let board = Board::starting_position();

        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.pieces(Color::Light).len(), 16);
        assert_eq!(board.pieces(Color::Dark).len(), 16);

        assert_eq!(
            board.king_square(Color::Light),
            Ok(Square::at(7, 4)),
            "Light king starts on row 7, column 4"
        );
        assert_eq!(board.king_square(Color::Dark), Ok(Square::at(0, 4)));

        let queen = board.piece_at(Square::at(7, 3)).expect("light queen");
        assert_eq!(queen.piece_type, PieceType::Queen);
        assert_eq!(queen.color, Color::Light);

        for col in 0..BOARD_SIZE {
            assert_eq!(
                board.piece_at(Square::at(1, col)).map(|p| (p.piece_type, p.color)),
                Some((PieceType::Pawn, Color::Dark))
            );
            assert!(board.is_empty(Square::at(4, col)), "Middle rows start empty");
        }
    }

    #[test]
    fn test_starting_position_ids_unique() {
        let board = Board::starting_position();
        let mut ids: Vec<PieceId> = board.occupied().map(|(p, _)| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32, "Every piece gets its own identity");
    }

    #[test]
    fn test_clone_is_independent() {
        //! Mutating a clone must never reach the original
        let board = Board::starting_position();
        let mut copy = board.clone();

        copy.clear(Square::at(6, 4));
        copy.clear(Square::at(7, 4));

        assert!(board.piece_at(Square::at(6, 4)).is_some());
        assert!(board.king_square(Color::Light).is_ok());
        assert_ne!(board, copy);
    }

    #[test]
    fn test_missing_king_is_an_error() {
        let mut board = Board::empty();
        board
            .spawn(Square::at(0, 4), PieceType::King, Color::Dark)
            .expect("empty square");

        assert_eq!(
            board.king_square(Color::Light),
            Err(RulesError::MissingKing { color: Color::Light })
        );
    }

    #[test]
    fn test_place_rejects_duplicate_identity() {
        let mut board = Board::empty();
        let rook = board
            .spawn(Square::at(7, 0), PieceType::Rook, Color::Light)
            .expect("empty square");

        let result = board.place(Square::at(3, 3), rook);

        assert_eq!(
            result,
            Err(RulesError::DuplicatePiece {
                id: rook.id,
                square: Square::at(7, 0)
            })
        );
        assert!(board.is_empty(Square::at(3, 3)), "Rejected placement leaves board untouched");
    }

    #[test]
    fn test_place_returns_previous_occupant() {
        let mut board = Board::empty();
        let knight = board
            .spawn(Square::at(2, 2), PieceType::Knight, Color::Dark)
            .expect("empty square");
        let bishop = Piece::new(PieceId(40), PieceType::Bishop, Color::Light);

        assert_eq!(board.place(Square::at(2, 2), bishop), Ok(Some(knight)));

        let next = board
            .spawn(Square::at(5, 5), PieceType::Pawn, Color::Light)
            .expect("empty square");
        assert!(next.id.0 > 40, "Spawned ids never collide with placed ones");
    }

    #[test]
    fn test_place_at_id_limit() {
        //! The highest id can be placed; once it is taken spawn reports the
        //! collision instead of handing it out twice
        let mut board = Board::empty();
        let last = Piece::new(PieceId(u32::MAX), PieceType::Rook, Color::Dark);

        assert_eq!(board.place(Square::at(0, 0), last), Ok(None));
        assert_eq!(
            board.spawn(Square::at(7, 7), PieceType::Rook, Color::Light),
            Err(RulesError::DuplicatePiece {
                id: PieceId(u32::MAX),
                square: Square::at(0, 0)
            })
        );
        assert!(board.is_empty(Square::at(7, 7)));
    }

    #[test]
    fn test_spawn_onto_occupied_square() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.spawn(Square::at(0, 0), PieceType::Queen, Color::Light),
            Err(RulesError::SquareOccupied {
                square: Square::at(0, 0)
            })
        );
    }

    #[test]
    fn test_scramble_keeps_every_piece() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let board = Board::starting_position();
        let mut scrambled = board.clone();
        scrambled.scramble(&mut StdRng::seed_from_u64(7));

        let mut before: Vec<Piece> = board.occupied().map(|(p, _)| p).collect();
        let mut after: Vec<Piece> = scrambled.occupied().map(|(p, _)| p).collect();
        before.sort_by_key(|p| p.id);
        after.sort_by_key(|p| p.id);

        assert_eq!(before, after, "Scramble moves pieces but never adds or removes one");
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::starting_position().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }
}
