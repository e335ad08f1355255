//! Board geometry and layout constants
//!
//! Direction and offset tables are `(d_row, d_col)` pairs. The generator and the attack
//! detector both read from here, so a piece attacks exactly the squares it could move to
//! with a capture.

use crate::types::{PieceType, SpecialMove};

pub const BOARD_SIZE: u8 = 8;

pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-2, 1),
    (-1, 2),
    (2, -1),
    (1, -2),
    (-2, -1),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = ALL_DIRECTIONS;

pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Back rank from column 0 to column 7
pub const BACK_RANK_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const KING_START_COL: u8 = 4;

/// Columns involved in castling toward one corner, all on the mover's back rank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleLane {
    pub special: SpecialMove,
    pub rook_from: u8,
    pub rook_to: u8,
    pub king_to: u8,
    /// Squares strictly between king and rook; must be empty
    pub between: &'static [u8],
    /// Squares the king stands on or crosses; none may be attacked
    pub king_path: &'static [u8],
}

pub const KINGSIDE: CastleLane = CastleLane {
    special: SpecialMove::CastleKingside,
    rook_from: 7,
    rook_to: 5,
    king_to: 6,
    between: &[5, 6],
    king_path: &[4, 5, 6],
};

pub const QUEENSIDE: CastleLane = CastleLane {
    special: SpecialMove::CastleQueenside,
    rook_from: 0,
    rook_to: 3,
    king_to: 2,
    between: &[1, 2, 3],
    king_path: &[4, 3, 2],
};

pub const CASTLE_LANES: [CastleLane; 2] = [KINGSIDE, QUEENSIDE];

/// Lane for a castling move, `None` for every other kind of move
pub fn castle_lane(special: SpecialMove) -> Option<&'static CastleLane> {
    match special {
        SpecialMove::CastleKingside => Some(&KINGSIDE),
        SpecialMove::CastleQueenside => Some(&QUEENSIDE),
        SpecialMove::None | SpecialMove::EnPassant => None,
    }
}
