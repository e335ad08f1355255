//! # Core Types
//!
//! Value types shared by every part of the engine: squares, colors, pieces and moves.
//!
//! ## Orientation
//!
//! Squares are `(row, col)` pairs in `0..8`. Row 0 is Dark's back rank and row 7 is
//! Light's back rank, so Light pawns start on row 6 and advance toward row 0 while Dark
//! pawns start on row 1 and advance toward row 7. Column 0 is the queenside corner for
//! both colors and column 4 is where both kings start.
//!
//! ## Identity
//!
//! Every physical piece carries a [`PieceId`]. The id survives moves and promotion, which
//! lets a presentation layer animate "the same piece" from square to square and lets the
//! engine answer "has this rook ever moved" by scanning history for its id.

use std::fmt;

use crate::constants::{BOARD_SIZE, PROMOTION_CHOICES};
use crate::error::{RulesError, RulesResult};

/// A square on the 8x8 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, rejecting coordinates outside the board
    pub fn new(row: u8, col: u8) -> RulesResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(RulesError::InvalidSquare { row, col })
        }
    }

    /// Build a square from coordinates already known to be on the board
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` if that falls off the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let size = BOARD_SIZE as i8;

        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Squares walked one step at a time along `direction`, excluding `self`,
    /// up to the edge of the board
    pub fn ray(self, direction: (i8, i8)) -> Ray {
        Ray {
            current: self,
            direction,
        }
    }

    /// Iterate all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the squares along one direction, see [`Square::ray`]
#[derive(Clone, Debug)]
pub struct Ray {
    current: Square,
    direction: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let next = self.current.offset(self.direction.0, self.direction.1)?;
        self.current = next;
        Some(next)
    }
}

/// The two sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a pawn advance
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this side's king and rooks at the start
    pub fn back_rank(self) -> u8 {
        match self {
            Color::Light => BOARD_SIZE - 1,
            Color::Dark => 0,
        }
    }

    /// Row this side's pawns start on
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => BOARD_SIZE - 2,
            Color::Dark => 1,
        }
    }

    /// Row on which this side's pawns promote
    pub fn promotion_row(self) -> u8 {
        self.opponent().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("light"),
            Color::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Piece types a pawn may promote to, in generation order
    pub fn promotion_choices() -> &'static [PieceType] {
        &PROMOTION_CHOICES
    }

    /// Single-letter symbol, uppercase
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }
}

/// Identity token of one physical piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(id: PieceId, piece_type: PieceType, color: Color) -> Self {
        Piece {
            id,
            piece_type,
            color,
        }
    }

    /// The same physical piece with a different type (promotion)
    pub fn promoted_to(self, piece_type: PieceType) -> Self {
        Piece { piece_type, ..self }
    }

    /// Board diagram symbol: uppercase for Light, lowercase for Dark
    pub fn symbol(self) -> char {
        let symbol = self.piece_type.symbol();
        match self.color {
            Color::Light => symbol,
            Color::Dark => symbol.to_ascii_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialMove {
    #[default]
    None,
    CastleKingside,
    CastleQueenside,
    EnPassant,
}

impl SpecialMove {
    pub fn is_castle(self) -> bool {
        matches!(self, SpecialMove::CastleKingside | SpecialMove::CastleQueenside)
    }
}

/// A single move, as produced by the generator and consumed by the executor
///
/// `piece` is the mover as it stood before the move. `captured` is the piece removed by
/// this move; for en passant that is the pawn beside the mover, not the occupant of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceType>,
    pub special: SpecialMove,
}

impl Move {
    /// A plain move onto an empty square
    pub fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            special: SpecialMove::None,
        }
    }

    /// A move onto `to`, capturing whatever `occupant` holds
    pub fn onto(from: Square, to: Square, piece: Piece, occupant: Option<Piece>) -> Self {
        Move {
            captured: occupant,
            ..Move::quiet(from, to, piece)
        }
    }

    pub fn en_passant(from: Square, to: Square, piece: Piece, victim: Piece) -> Self {
        Move {
            captured: Some(victim),
            special: SpecialMove::EnPassant,
            ..Move::quiet(from, to, piece)
        }
    }

    pub fn castle(from: Square, to: Square, king: Piece, special: SpecialMove) -> Self {
        Move {
            special,
            ..Move::quiet(from, to, king)
        }
    }

    pub fn with_promotion(self, piece_type: PieceType) -> Self {
        Move {
            promotion: Some(piece_type),
            ..self
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether this move shares origin, destination and promotion choice with another
    pub fn same_action(&self, from: Square, to: Square, promotion: Option<PieceType>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }
}
